/// Tests for the 120-month roadmap projection and the derived overview
/// These tests verify anchor exactness, completion flags and input validation

#[cfg(test)]
mod roadmap_projection_tests {
    use mietoru_core::roadmap::{
        project, project_with, BusinessPhase, RecordedActuals, YearlyTarget,
    };
    use mietoru_core::settings::default_yearly_targets;
    use mietoru_core::{Error, ValidationError};

    fn targets() -> Vec<YearlyTarget> {
        default_yearly_targets(1).unwrap()
    }

    #[test]
    fn test_projection_has_120_contiguous_months() {
        let projection = project(&targets(), 5_000_000.0, 18).unwrap();

        assert_eq!(projection.months.len(), 120, "Projection must cover 120 months");
        for (i, month) in projection.months.iter().enumerate() {
            assert_eq!(month.month, i as u32 + 1, "Months must be in order without gaps");
            assert_eq!(month.year, i as u32 / 12 + 1);
            assert_eq!(month.month_in_year, i as u32 % 12 + 1);
        }
    }

    #[test]
    fn test_year_end_matches_anchor_exactly() {
        let mut targets = targets();
        // Values that do not interpolate cleanly in binary floating point
        targets[0].net_worth = 0.3;
        targets[1].net_worth = 1.0 / 3.0;
        targets[2].net_worth = 7.1;

        let projection = project(&targets, 0.1, 0).unwrap();

        for target in &targets {
            let year_end = projection.month(target.year * 12).unwrap();
            assert_eq!(
                year_end.target_net_worth, target.net_worth,
                "Year {} must end exactly on its anchor",
                target.year
            );
        }
    }

    #[test]
    fn test_half_year_interpolation_example() {
        // Start from 5M of assets towards a 7M year-1 anchor, 6 months elapsed
        let mut targets = targets();
        targets[0].net_worth = 7_000_000.0;

        let projection = project(&targets, 5_000_000.0, 6).unwrap();

        assert_eq!(projection.month(6).unwrap().target_net_worth, 6_000_000.0);
        assert_eq!(projection.month(12).unwrap().target_net_worth, 7_000_000.0);

        let current = projection.current().expect("Month 7 should be current");
        assert_eq!(current.month, 7);
        assert!(projection.months[..6].iter().all(|m| m.is_completed));
        assert!(projection.months[6..].iter().all(|m| !m.is_completed));
    }

    #[test]
    fn test_year_two_interpolates_between_anchors() {
        let projection = project(&targets(), 5_000_000.0, 0).unwrap();

        // Year 2 runs from the 5M year-1 anchor to the 7M year-2 anchor
        assert_eq!(projection.month(18).unwrap().target_net_worth, 6_000_000.0);
        assert_eq!(projection.month(24).unwrap().target_net_worth, 7_000_000.0);
    }

    #[test]
    fn test_interpolates_from_current_assets_in_year_one() {
        let projection = project(&targets(), 2_000_000.0, 0).unwrap();

        // Year 1 runs from 2M to 5M: 250k per month
        assert_eq!(projection.month(1).unwrap().target_net_worth, 2_250_000.0);
        assert_eq!(projection.month(6).unwrap().target_net_worth, 3_500_000.0);
        assert_eq!(projection.month(12).unwrap().target_net_worth, 5_000_000.0);
    }

    #[test]
    fn test_zero_elapsed_months() {
        let projection = project(&targets(), 5_000_000.0, 0).unwrap();

        assert!(projection.months.iter().all(|m| !m.is_completed), "Nothing completed yet");
        assert_eq!(projection.current().map(|m| m.month), Some(1));
        assert_eq!(projection.completed_months, 0);
        assert_eq!(projection.completion_ratio, 0.0);
    }

    #[test]
    fn test_roadmap_fully_elapsed() {
        for elapsed in [120, 121, 500] {
            let projection = project(&targets(), 5_000_000.0, elapsed).unwrap();

            assert!(projection.months.iter().all(|m| m.is_completed));
            assert!(projection.current().is_none(), "No current month once finished");
            assert_eq!(projection.completed_months, 120);
            assert_eq!(projection.completion_ratio, 1.0);
        }
    }

    #[test]
    fn test_at_most_one_current_month() {
        for elapsed in [0, 1, 11, 12, 59, 119, 120] {
            let projection = project(&targets(), 5_000_000.0, elapsed).unwrap();
            let current = projection.months.iter().filter(|m| m.is_current).count();
            let expected = if elapsed < 120 { 1 } else { 0 };
            assert_eq!(current, expected, "elapsed = {}", elapsed);

            for month in &projection.months {
                assert_eq!(month.is_completed, month.month <= elapsed);
            }
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let first = project(&targets(), 4_321_000.0, 37).unwrap();
        let second = project(&targets(), 4_321_000.0, 37).unwrap();

        assert_eq!(first, second);
        for (a, b) in first.months.iter().zip(&second.months) {
            assert_eq!(a.target_net_worth.to_bits(), b.target_net_worth.to_bits());
            assert_eq!(a.actual_net_worth.to_bits(), b.actual_net_worth.to_bits());
        }
    }

    #[test]
    fn test_damped_actual_net_worth() {
        let projection = project(&targets(), 5_000_000.0, 18).unwrap();

        // Month 18: target 6M, fully within elapsed range -> 5M + 1M * 0.85
        let month_18 = projection.month(18).unwrap();
        assert!((month_18.actual_net_worth - 5_850_000.0).abs() < 1e-6);

        // Month 36: target 10M, progress rate 18/36 -> 5M + 5M * 0.5 * 0.85
        let month_36 = projection.month(36).unwrap();
        assert!((month_36.actual_net_worth - 7_125_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_recorded_actuals_override_estimate() {
        let actuals = RecordedActuals::new([(1, 5_100_000.0), (2, 5_050_000.0)]).unwrap();
        let projection = project_with(&actuals, &targets(), 5_000_000.0, 2).unwrap();
        let estimated = project(&targets(), 5_000_000.0, 2).unwrap();

        assert_eq!(projection.month(1).unwrap().actual_net_worth, 5_100_000.0);
        assert_eq!(projection.month(2).unwrap().actual_net_worth, 5_050_000.0);
        assert_eq!(
            projection.month(3).unwrap().actual_net_worth,
            estimated.month(3).unwrap().actual_net_worth,
            "Months without bookings fall back to the estimate"
        );
    }

    #[test]
    fn test_phase_follows_year() {
        let projection = project(&targets(), 5_000_000.0, 0).unwrap();

        assert_eq!(projection.month(36).unwrap().phase, BusinessPhase::Founding);
        assert_eq!(projection.month(37).unwrap().phase, BusinessPhase::Transition);
        assert_eq!(projection.month(61).unwrap().phase, BusinessPhase::Growth);
    }

    #[test]
    fn test_rejects_wrong_target_count() {
        let mut short = targets();
        short.pop();

        match project(&short, 5_000_000.0, 0) {
            Err(Error::Validation(ValidationError::TargetCount { expected, actual })) => {
                assert_eq!(expected, 10);
                assert_eq!(actual, 9);
            }
            other => panic!("Expected TargetCount error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_contiguous_years() {
        let mut swapped = targets();
        swapped.swap(3, 4);

        match project(&swapped, 5_000_000.0, 0) {
            Err(Error::Validation(ValidationError::NonContiguousYear { position, year })) => {
                assert_eq!(position, 3);
                assert_eq!(year, 5);
            }
            other => panic!("Expected NonContiguousYear error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_assets() {
        let result = project(&targets(), -1.0, 0);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::NegativeAmount { .. }))
        ));
    }

    #[test]
    fn test_rejects_non_finite_amounts() {
        let mut targets = targets();
        targets[4].net_worth = f64::NAN;
        assert!(project(&targets, 5_000_000.0, 0).is_err());
        assert!(project(&default_yearly_targets(1).unwrap(), f64::INFINITY, 0).is_err());
    }
}

#[cfg(test)]
mod roadmap_overview_tests {
    use mietoru_core::roadmap::roadmap_service::{milestone_progress, phase_summaries};
    use mietoru_core::roadmap::{project, BusinessPhase, RoadmapOverview};
    use mietoru_core::settings::default_yearly_targets;

    #[test]
    fn test_overview_current_position() {
        let targets = default_yearly_targets(1).unwrap();
        let projection = project(&targets, 5_000_000.0, 18).unwrap();
        let overview = RoadmapOverview::from_projection(projection, &targets, 5_000_000.0);

        let position = overview.current_position.expect("Month 19 is current");
        assert_eq!(position.month, 19);
        assert_eq!(position.year, 2);
        assert_eq!(position.month_in_year, 7);
        assert_eq!(position.phase, BusinessPhase::Founding);
        assert!((overview.progress_percentage - 15.0).abs() < 1e-9);
        assert_eq!(overview.current_guide.map(|g| g.year), Some(2));
    }

    #[test]
    fn test_overview_after_completion() {
        let targets = default_yearly_targets(1).unwrap();
        let projection = project(&targets, 5_000_000.0, 120).unwrap();
        let overview = RoadmapOverview::from_projection(projection, &targets, 5_000_000.0);

        assert!(overview.current_position.is_none());
        assert_eq!(overview.progress_percentage, 100.0);
        assert_eq!(overview.current_guide.map(|g| g.year), Some(10));
    }

    #[test]
    fn test_phase_summaries_group_consecutive_years() {
        let summaries = phase_summaries(&default_yearly_targets(1).unwrap());

        assert_eq!(summaries.len(), 3);
        assert_eq!(
            (summaries[0].phase, summaries[0].first_year, summaries[0].last_year),
            (BusinessPhase::Founding, 1, 3)
        );
        assert_eq!(
            (summaries[1].phase, summaries[1].first_year, summaries[1].last_year),
            (BusinessPhase::Transition, 4, 5)
        );
        assert_eq!(
            (summaries[2].phase, summaries[2].first_year, summaries[2].last_year),
            (BusinessPhase::Growth, 6, 10)
        );
        assert_eq!(summaries[2].minimum_profit, 8_000_000.0);
    }

    #[test]
    fn test_phase_summaries_split_repeated_phase() {
        let mut targets = default_yearly_targets(1).unwrap();
        targets[9].phase = BusinessPhase::Founding;
        targets[8].phase = BusinessPhase::Stable;

        let summaries = phase_summaries(&targets);
        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries.last().unwrap().phase, BusinessPhase::Founding);
        assert_eq!(summaries.last().unwrap().first_year, 10);
    }

    #[test]
    fn test_milestones_use_year_1_5_10() {
        let milestones = milestone_progress(&default_yearly_targets(1).unwrap(), 5_000_000.0);

        let years: Vec<u32> = milestones.iter().map(|m| m.year).collect();
        assert_eq!(years, vec![1, 5, 10]);
        assert_eq!(milestones[0].percentage, 100.0);
        assert_eq!(milestones[1].percentage, 25.0);
        assert_eq!(milestones[2].percentage, 10.0);
    }

    #[test]
    fn test_milestone_with_zero_target() {
        let mut targets = default_yearly_targets(1).unwrap();
        targets[0].net_worth = 0.0;

        let milestones = milestone_progress(&targets, 1_000.0);
        assert_eq!(milestones[0].percentage, 0.0);
    }

    #[test]
    fn test_overview_milestones_before_any_completed_month() {
        let targets = default_yearly_targets(1).unwrap();
        let projection = project(&targets, 2_500_000.0, 0).unwrap();
        let overview = RoadmapOverview::from_projection(projection, &targets, 2_500_000.0);

        assert_eq!(overview.milestones[0].current, 2_500_000.0);
        assert_eq!(overview.milestones[0].percentage, 50.0);
    }
}

#[cfg(test)]
mod target_command_tests {
    use mietoru_core::roadmap::roadmap_commands::apply;
    use mietoru_core::roadmap::{BusinessPhase, TargetCommand, TargetField};
    use mietoru_core::settings::default_yearly_targets;
    use mietoru_core::{Error, ValidationError};

    #[test]
    fn test_set_field_returns_new_table() {
        let original = default_yearly_targets(1).unwrap();
        let command = TargetCommand::SetField {
            year: 3,
            field: TargetField::NetWorth,
            value: 12_000_000.0,
        };

        let updated = apply(&original, &command).unwrap();

        assert_eq!(updated[2].net_worth, 12_000_000.0);
        assert_eq!(original[2].net_worth, 10_000_000.0, "Input must not change");
        assert_eq!(updated[3], original[3]);
    }

    #[test]
    fn test_set_employees_requires_whole_number() {
        let original = default_yearly_targets(1).unwrap();
        let fractional = TargetCommand::SetField {
            year: 1,
            field: TargetField::Employees,
            value: 2.5,
        };
        assert!(apply(&original, &fractional).is_err());

        let whole = TargetCommand::SetField {
            year: 1,
            field: TargetField::Employees,
            value: 4.0,
        };
        assert_eq!(apply(&original, &whole).unwrap()[0].employees, 4);
    }

    #[test]
    fn test_negative_revenue_rejected() {
        let command = TargetCommand::SetField {
            year: 2,
            field: TargetField::Revenue,
            value: -10.0,
        };
        assert!(apply(&default_yearly_targets(1).unwrap(), &command).is_err());
    }

    #[test]
    fn test_unknown_year_rejected() {
        let command = TargetCommand::SetPhase {
            year: 11,
            phase: BusinessPhase::Stable,
        };
        assert!(apply(&default_yearly_targets(1).unwrap(), &command).is_err());
    }

    #[test]
    fn test_set_phase() {
        let command = TargetCommand::SetPhase {
            year: 10,
            phase: BusinessPhase::Stable,
        };
        let updated = apply(&default_yearly_targets(1).unwrap(), &command).unwrap();
        assert_eq!(updated[9].phase, BusinessPhase::Stable);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut edited = default_yearly_targets(1).unwrap();
        edited[0].net_worth = 1.0;

        let reset = apply(&edited, &TargetCommand::Reset { initial_employees: 2 }).unwrap();
        assert_eq!(reset, default_yearly_targets(2).unwrap());
    }

    #[test]
    fn test_reset_rejects_overflowing_headcount() {
        let original = default_yearly_targets(1).unwrap();
        let command = TargetCommand::Reset {
            initial_employees: u32::MAX,
        };

        match apply(&original, &command) {
            Err(Error::Validation(ValidationError::InvalidInput(message))) => {
                assert!(message.contains("initialEmployees"), "{}", message);
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_set_employees_above_limit_rejected() {
        let command = TargetCommand::SetField {
            year: 1,
            field: TargetField::Employees,
            value: 4_294_967_295.0,
        };
        assert!(apply(&default_yearly_targets(1).unwrap(), &command).is_err());
    }

    #[test]
    fn test_command_json_shape() {
        let json = r#"{"type":"setField","year":4,"field":"netWorth","value":16000000}"#;
        let command: TargetCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            command,
            TargetCommand::SetField {
                year: 4,
                field: TargetField::NetWorth,
                value: 16_000_000.0,
            }
        );

        let reset: TargetCommand =
            serde_json::from_str(r#"{"type":"reset","initialEmployees":3}"#).unwrap();
        assert_eq!(reset, TargetCommand::Reset { initial_employees: 3 });
    }
}
