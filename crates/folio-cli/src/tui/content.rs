//! Static page content that does not come from translations or config

/// One skill card
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: &'static str,
}

/// A titled group of skill cards
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    /// Translation key of the group title
    pub title_key: &'static str,
    /// Stagger steps before the group's first card
    pub base_step: usize,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, icon: &'static str) -> Skill {
    Skill { name, level, icon }
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title_key: "skills.frontend",
        base_step: 0,
        skills: &[
            skill("HTML", 95, "◇"),
            skill("CSS", 95, "◆"),
            skill("TypeScript", 80, "TS"),
            skill("React", 75, "⚛"),
            skill("TailwindCSS", 70, "≈"),
            skill("Vue.js", 55, "V"),
        ],
    },
    SkillGroup {
        title_key: "skills.backend",
        base_step: 4,
        skills: &[
            skill("Rust", 70, "R"),
            skill("Node.js", 65, "N"),
            skill("SQL", 60, "▤"),
            skill("GraphQL", 40, "◈"),
        ],
    },
    SkillGroup {
        title_key: "skills.design",
        base_step: 8,
        skills: &[
            skill("UX/UI Design", 90, "◎"),
            skill("Figma", 85, "✎"),
            skill("Responsive Design", 95, "▭"),
            skill("Animation", 80, "✦"),
        ],
    },
    SkillGroup {
        title_key: "skills.tools",
        base_step: 8,
        skills: &[
            skill("Git/GitHub", 85, "⎇"),
            skill("Vercel", 90, "△"),
            skill("Netlify", 80, "N"),
            skill("Docker", 60, "▣"),
        ],
    },
];

/// Stagger index of every card, used to size the skills reveal
pub fn skill_card_count() -> usize {
    SKILL_GROUPS
        .iter()
        .map(|g| g.base_step + g.skills.len())
        .max()
        .unwrap_or(0)
}
