use crate::roadmap::roadmap_model::YearGuide;

struct GuideEntry {
    year: u32,
    milestones: &'static [&'static str],
    todo_list: &'static [&'static str],
}

const GUIDES: [GuideEntry; 10] = [
    GuideEntry {
        year: 1,
        milestones: &[
            "お金が少しずつ入ってくるようになった",
            "なんとか生活できるくらいにはなった",
        ],
        todo_list: &[
            "お客さんを見つけよう",
            "月に10万円以上の黒字を目指そう",
            "使ったお金を毎月記録しよう",
        ],
    },
    GuideEntry {
        year: 2,
        milestones: &["月の売上が50万円くらいに安定", "お金の流れがわかってきた"],
        todo_list: &[
            "無駄な支出を見直そう",
            "お金の使い方に優先順位をつけよう",
            "利益（売上−かかったお金）を20万円以上目指そう",
        ],
    },
    GuideEntry {
        year: 3,
        milestones: &[
            "お客さんがリピートしてくれるように",
            "売上が月80万円くらいになる",
        ],
        todo_list: &[
            "「何が一番もうかるか」見えるようにしよう",
            "人にお願いする仕事を少しずつ増やしてみよう",
        ],
    },
    GuideEntry {
        year: 4,
        milestones: &["月100万円以上の売上が出てきた", "経費をかける余裕もある"],
        todo_list: &[
            "「手元にいくら残るか」を意識しよう",
            "広告や外注などに使うお金を計画的に",
        ],
    },
    GuideEntry {
        year: 5,
        milestones: &["年間で500万円くらい残るように", "事業がまわり始めている"],
        todo_list: &[
            "お金の記録をしっかりつけよう",
            "税理士に相談して節税を始めよう",
            "使わないお金は「手元に残す」習慣を",
        ],
    },
    GuideEntry {
        year: 6,
        milestones: &["チームや仲間がいる状態に", "売上以外にも収入が増えてくる"],
        todo_list: &[
            "毎月の売上が自動で入る仕組みを考えよう",
            "「時間を使わないでも収入がある状態」をつくる",
        ],
    },
    GuideEntry {
        year: 7,
        milestones: &[
            "自分が動かなくても収入がある状態",
            "自分の時間に余裕ができてきた",
        ],
        todo_list: &[
            "お金を「使う・守る・ふやす」のバランスを考える",
            "資産（残しておくお金）を運用も検討しよう",
        ],
    },
    GuideEntry {
        year: 8,
        milestones: &["事業も生活も安定している", "将来への備えもできてきた"],
        todo_list: &[
            "「お金に働いてもらう」方法を学ぼう",
            "投資・資産運用を税理士と相談して始めよう",
        ],
    },
    GuideEntry {
        year: 9,
        milestones: &["自由に働き方を選べるように", "税金や老後の準備も視野に入る"],
        todo_list: &[
            "ライフプランを見直そう",
            "事業を続ける？売る？次の目標は？と考えよう",
        ],
    },
    GuideEntry {
        year: 10,
        milestones: &[
            "夢だった目標が現実に！",
            "好きなことをする時間・お金・自由が手に入った",
        ],
        todo_list: &[
            "成功パターンをふりかえろう",
            "次の目標を考えよう：家族、趣味、投資、社会貢献など",
        ],
    },
];

/// Guide for a roadmap year (1..=10)
pub fn year_guide(year: u32) -> Option<YearGuide> {
    GUIDES.iter().find(|g| g.year == year).map(|g| YearGuide {
        year: g.year,
        milestones: g.milestones.iter().map(|s| s.to_string()).collect(),
        todo_list: g.todo_list.iter().map(|s| s.to_string()).collect(),
    })
}

pub fn all_year_guides() -> Vec<YearGuide> {
    (1..=GUIDES.len() as u32).filter_map(year_guide).collect()
}
