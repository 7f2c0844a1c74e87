//! Section builders
//!
//! Each builder lays a section out as document rows at a fixed width. Row
//! counts become the section heights the page geometry runs on.

use chrono::{DateTime, Datelike, Local, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use folio_core::config::ProfileConfig;
use folio_core::contact::{ContactController, ContactStatus, Field};
use folio_core::projects::{LoadStatus, Project, ProjectListing};
use folio_core::{Section, Translator};

use crate::tui::content::{Skill, SKILL_GROUPS};
use crate::tui::state::{DocLine, DocTarget};
use crate::tui::themes::Theme;
use crate::tui::utils::{pad_to_width, truncate_ellipsis, wrap_text};

/// Cells of a skill level bar
const BAR_WIDTH: usize = 20;

/// Rows of the message input
const MESSAGE_ROWS: usize = 4;

/// Description rows shown per project card
const DESCRIPTION_ROWS: usize = 2;

/// Topics shown per project card
const MAX_TOPICS: usize = 3;

/// Everything the builders read
pub(super) struct PageContent<'a> {
    pub translator: &'a Translator,
    pub theme: &'a Theme,
    pub owner: &'a str,
    pub profile: &'a ProfileConfig,
    pub listing: &'a ProjectListing,
    pub contact: &'a ContactController,
    pub focus: Option<Field>,
    /// Usable columns
    pub width: usize,
}

impl PageContent<'_> {
    pub fn build(&self, section: Section, viewport_height: usize) -> Vec<DocLine> {
        match section {
            Section::Hero => self.hero(viewport_height),
            Section::About => self.about(),
            Section::Skills => self.skills(),
            Section::Projects => self.projects(),
            Section::Contact => self.contact(),
        }
    }

    fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    fn style(&self) -> Style {
        Style::default().fg(self.theme.text_color)
    }

    fn dim(&self) -> Style {
        Style::default().fg(self.theme.dim_color)
    }

    fn accent(&self) -> Style {
        Style::default().fg(self.theme.accent_color)
    }

    fn link(&self) -> Style {
        Style::default()
            .fg(self.theme.link_color)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Wrapped paragraph in one style
    fn paragraph(&self, text: &str, style: Style) -> Vec<DocLine> {
        wrap_text(text, self.width)
            .into_iter()
            .map(|row| DocLine::new(Line::from(Span::styled(row, style))))
            .collect()
    }

    /// Eyebrow label, title and lead paragraph shared by the content sections
    fn heading(&self, label_key: &str, title: String, desc_key: &str) -> Vec<DocLine> {
        let mut lines = vec![
            DocLine::blank(),
            DocLine::new(Line::from(Span::styled(
                self.t(label_key).to_uppercase(),
                self.accent().add_modifier(Modifier::BOLD),
            ))),
        ];
        lines.extend(self.paragraph(
            &title,
            Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(DocLine::blank());
        lines.extend(self.paragraph(&self.t(desc_key), self.dim()));
        lines.push(DocLine::blank());
        lines
    }

    fn button(&self, label: String, target: DocTarget) -> DocLine {
        DocLine::new(Line::from(Span::styled(
            format!("[ {label} ]"),
            self.accent().add_modifier(Modifier::BOLD),
        )))
        .target(target)
    }

    /// Full-viewport intro, content centered vertically
    fn hero(&self, viewport_height: usize) -> Vec<DocLine> {
        let greeting = self
            .translator
            .t_with("hero.greeting", &[("owner", self.owner)]);

        let mut content = self.paragraph(
            &greeting,
            Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
        );
        content.extend(self.paragraph(&self.t("hero.role"), self.accent()));
        content.push(DocLine::blank());
        content.extend(self.paragraph(&self.t("hero.tagline"), self.style()));
        content.push(DocLine::blank());
        content.push(self.button(self.t("hero.viewWork"), DocTarget::Section(Section::Projects)));
        content.push(self.button(self.t("hero.contactMe"), DocTarget::Section(Section::Contact)));

        let scroll_hint = DocLine::new(Line::from(Span::styled(
            format!("⌄ {}", self.t("hero.scroll")),
            self.dim(),
        )))
        .target(DocTarget::Section(Section::About));

        let height = viewport_height.max(content.len() + 2);
        let top = (height - content.len() - 1) / 2;

        let mut lines = Vec::with_capacity(height);
        lines.resize_with(top, DocLine::blank);
        lines.extend(content);
        lines.resize_with(height - 1, DocLine::blank);
        lines.push(scroll_hint);
        lines
    }

    fn about(&self) -> Vec<DocLine> {
        let title = self
            .translator
            .t_with("about.title", &[("owner", self.owner)]);
        let mut lines = self.heading("about.section", title, "about.desc");

        if !self.profile.experience.is_empty() {
            lines.push(DocLine::new(Line::from(Span::styled(
                self.t("about.experience"),
                Style::default()
                    .fg(self.theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ))));
            for (i, job) in self.profile.experience.iter().enumerate() {
                let company_style = if job.url.is_some() {
                    self.link()
                } else {
                    self.accent()
                };
                let mut row = DocLine::new(Line::from(vec![
                    Span::styled("▸ ", self.accent()),
                    Span::styled(job.title.clone(), self.style().add_modifier(Modifier::BOLD)),
                    Span::styled(" · ", self.dim()),
                    Span::styled(job.company.clone(), company_style),
                ]))
                .child(i);
                if let Some(url) = &job.url {
                    row = row.target(DocTarget::Url(url.clone()));
                }
                lines.push(row);
                if !job.period.is_empty() {
                    lines.push(
                        DocLine::new(Line::from(Span::styled(
                            format!("  {}", job.period),
                            self.dim(),
                        )))
                        .child(i),
                    );
                }
            }
            lines.push(DocLine::blank());
        }

        if let Some(url) = &self.profile.resume_url {
            lines.push(self.button(self.t("about.resume"), DocTarget::Url(url.clone())));
            lines.push(DocLine::blank());
        }
        lines
    }

    fn skill_row(&self, skill: &Skill) -> Line<'static> {
        let name_width = self.width.saturating_sub(BAR_WIDTH + 12).clamp(8, 20);
        let filled = usize::from(skill.level) * BAR_WIDTH / 100;
        Line::from(vec![
            Span::styled(pad_to_width(skill.icon, 3), self.accent()),
            Span::styled(pad_to_width(skill.name, name_width), self.style()),
            Span::styled("█".repeat(filled), self.accent()),
            Span::styled("░".repeat(BAR_WIDTH - filled), self.dim()),
            Span::styled(format!(" {:>3}%", skill.level), self.dim()),
        ])
    }

    fn skills(&self) -> Vec<DocLine> {
        let mut lines = self.heading("skills.section", self.t("skills.title"), "skills.desc");
        for group in &SKILL_GROUPS {
            lines.push(DocLine::new(Line::from(Span::styled(
                self.t(group.title_key),
                Style::default()
                    .fg(self.theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ))));
            for (i, skill) in group.skills.iter().enumerate() {
                lines.push(DocLine::new(self.skill_row(skill)).child(group.base_step + i));
            }
            lines.push(DocLine::blank());
        }
        lines
    }

    /// Category chips, wrapped onto as many rows as needed
    fn filter_bar(&self) -> Vec<DocLine> {
        let current = self.listing.filter();
        let mut rows = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;

        for category in self.listing.categories() {
            let chip = format!(" {} ", category.label());
            let chip_width = chip.width() + 1;
            if used > 0 && used + chip_width > self.width {
                rows.push(DocLine::new(Line::from(std::mem::take(&mut spans))));
                used = 0;
            }
            let style = if &category == current {
                Style::default()
                    .fg(self.theme.bg_color)
                    .bg(self.theme.accent_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.dim()
            };
            spans.push(Span::styled(chip, style));
            spans.push(Span::raw(" "));
            used += chip_width;
        }
        if !spans.is_empty() {
            rows.push(DocLine::new(Line::from(spans)));
        }
        rows
    }

    fn project_card(&self, index: usize, project: &Project) -> Vec<DocLine> {
        let counts = format!("★ {}  ⑂ {}", project.stars, project.forks);
        let name_width = self.width.saturating_sub(counts.width() + 3);
        let name = truncate_ellipsis(&project.name, name_width);
        let gap = self
            .width
            .saturating_sub(2 + name.width() + counts.width())
            .max(1);

        let mut card = vec![DocLine::new(Line::from(vec![
            Span::styled("▸ ", self.accent()),
            Span::styled(name, self.link().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(gap)),
            Span::styled(counts, self.dim()),
        ]))
        .target(DocTarget::Url(project.url.clone()))];

        let description = match &project.description {
            Some(text) => {
                let mut rows = wrap_text(text, self.width.saturating_sub(2));
                if rows.len() > DESCRIPTION_ROWS {
                    rows.truncate(DESCRIPTION_ROWS);
                    if let Some(last) = rows.last_mut() {
                        *last = truncate_ellipsis(&format!("{last}…"), self.width.saturating_sub(2));
                    }
                }
                rows.into_iter()
                    .map(|row| Line::from(Span::styled(format!("  {row}"), self.style())))
                    .collect()
            }
            None => vec![Line::from(Span::styled(
                format!("  {}", self.t("projects.noDescription")),
                self.dim().add_modifier(Modifier::ITALIC),
            ))],
        };
        card.extend(description.into_iter().map(DocLine::new));

        let language = project
            .language
            .clone()
            .unwrap_or_else(|| self.t("projects.various"));
        let mut tags = vec![Span::raw("  "), Span::styled(language, self.accent())];
        for topic in project.topics.iter().take(MAX_TOPICS) {
            tags.push(Span::styled(format!("  #{topic}"), self.dim()));
        }
        card.push(DocLine::new(Line::from(tags)));

        if let Some(homepage) = &project.homepage {
            card.push(
                DocLine::new(Line::from(vec![
                    Span::styled("  ↗ ", self.accent()),
                    Span::styled(
                        truncate_ellipsis(homepage, self.width.saturating_sub(4)),
                        self.link(),
                    ),
                ]))
                .target(DocTarget::Url(homepage.clone())),
            );
        }
        card.push(DocLine::blank());

        card.into_iter().map(|line| line.child(index)).collect()
    }

    fn projects(&self) -> Vec<DocLine> {
        let mut lines = self.heading("projects.section", self.t("projects.title"), "projects.desc");
        lines.extend(self.filter_bar());
        lines.push(DocLine::blank());

        match self.listing.status() {
            LoadStatus::Loading => {
                lines.extend(self.paragraph(&format!("⟳ {}", self.t("projects.loading")), self.dim()));
            }
            LoadStatus::Failed => {
                lines.extend(self.paragraph(
                    &self.t("projects.error"),
                    Style::default().fg(self.theme.error_color),
                ));
            }
            LoadStatus::Loaded => {
                let mut visible = self.listing.visible().peekable();
                if visible.peek().is_none() {
                    lines.extend(self.paragraph(&self.t("projects.empty"), self.dim()));
                }
                for (i, project) in visible.enumerate() {
                    lines.extend(self.project_card(i, project));
                }
            }
        }

        if let Some(updated) = self.listing.last_updated() {
            let time = format_updated(updated, Local::now());
            lines.push(DocLine::new(Line::from(Span::styled(
                self.translator.t_with("projects.updated", &[("time", &time)]),
                self.dim(),
            ))));
        }
        lines.push(DocLine::blank());
        lines
    }

    fn info_row(&self, label_key: &str, value: &str, target: Option<DocTarget>) -> DocLine {
        let value_style = if target.is_some() {
            self.link()
        } else {
            self.style()
        };
        let line = DocLine::new(Line::from(vec![
            Span::styled(format!("{}: ", self.t(label_key)), self.dim()),
            Span::styled(value.to_string(), value_style),
        ]));
        match target {
            Some(target) => line.target(target),
            None => line,
        }
    }

    /// Contact details from the profile
    fn contact_info(&self) -> Vec<DocLine> {
        let profile = self.profile;
        let mut lines = vec![DocLine::new(Line::from(Span::styled(
            self.t("contact.info.title"),
            Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
        )))];

        let location = profile
            .location
            .clone()
            .unwrap_or_else(|| self.t("contact.info.locationValue"));
        lines.push(self.info_row("contact.info.location", &location, None));
        if let Some(email) = &profile.email {
            let target = DocTarget::Url(format!("mailto:{email}"));
            lines.push(self.info_row("contact.info.email", email, Some(target)));
        }
        if let Some(phone) = &profile.phone {
            let dial: String = phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            let target = DocTarget::Url(format!("tel:{dial}"));
            lines.push(self.info_row("contact.info.phone", phone, Some(target)));
        }
        if let Some(linkedin) = &profile.linkedin {
            let target = DocTarget::Url(linkedin.clone());
            lines.push(self.info_row("contact.info.follow", "LinkedIn", Some(target)));
        }
        lines.push(DocLine::blank());
        lines
    }

    /// Label plus a bordered input for one field
    fn input(&self, field: Field) -> Vec<DocLine> {
        let focused = self.focus == Some(field);
        let border = if focused {
            self.accent()
        } else {
            Style::default().fg(self.theme.border_color)
        };
        let inner = self.width.saturating_sub(4).max(1);
        let value = self.contact.form().get(field);

        let mut rows: Vec<(String, Style)> = if value.is_empty() && !focused {
            vec![(self.t(field.placeholder_key()), self.dim())]
        } else {
            let caret = if focused { "▏" } else { "" };
            wrap_text(&format!("{value}{caret}"), inner)
                .into_iter()
                .map(|row| (row, self.style()))
                .collect()
        };
        let height = if field.is_multiline() { MESSAGE_ROWS } else { 1 };
        if rows.len() > height {
            // Keep the end of long input (and the caret) in view
            rows.drain(..rows.len() - height);
        }
        rows.resize_with(height, || (String::new(), self.style()));

        let target = DocTarget::Field(field);
        let mut lines = vec![DocLine::new(Line::from(Span::styled(
            self.t(field.label_key()),
            if focused { self.accent() } else { self.style() },
        )))
        .target(target.clone())];
        lines.push(
            DocLine::new(Line::from(Span::styled(
                format!("╭{}╮", "─".repeat(inner + 2)),
                border,
            )))
            .target(target.clone()),
        );
        for (text, style) in rows {
            lines.push(
                DocLine::new(Line::from(vec![
                    Span::styled("│ ", border),
                    Span::styled(pad_to_width(&text, inner), style),
                    Span::styled(" │", border),
                ]))
                .target(target.clone()),
            );
        }
        lines.push(
            DocLine::new(Line::from(Span::styled(
                format!("╰{}╯", "─".repeat(inner + 2)),
                border,
            )))
            .target(target),
        );
        lines
    }

    fn contact(&self) -> Vec<DocLine> {
        let mut lines = self.heading("contact.section", self.t("contact.title"), "contact.desc");
        lines.extend(self.contact_info());

        lines.push(DocLine::new(Line::from(Span::styled(
            self.t("contact.form.title"),
            Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
        ))));
        for field in Field::ALL {
            lines.extend(self.input(field));
        }
        lines.push(DocLine::blank());

        let status = self.contact.status();
        let label = if status.is_sending() {
            self.t("contact.form.sending")
        } else {
            self.t("contact.form.send")
        };
        lines.push(self.button(label, DocTarget::Submit));

        match status {
            ContactStatus::Success { .. } => {
                lines.push(DocLine::blank());
                lines.extend(self.paragraph(
                    &format!("✓ {}", self.t("contact.form.success")),
                    Style::default().fg(self.theme.success_color),
                ));
            }
            ContactStatus::Error(message) => {
                lines.push(DocLine::blank());
                lines.extend(self.paragraph(
                    &format!("✗ {message}"),
                    Style::default().fg(self.theme.error_color),
                ));
            }
            ContactStatus::Idle | ContactStatus::Sending => {}
        }
        lines.push(DocLine::blank());
        lines
    }

    /// Trailing content below the last section
    pub fn footer(&self) -> Vec<DocLine> {
        let rule = DocLine::new(Line::from(Span::styled(
            "─".repeat(self.width),
            Style::default().fg(self.theme.border_color),
        )));
        let mut lines = vec![
            rule,
            DocLine::new(Line::from(Span::styled(
                self.t("footer.quickLinks"),
                self.style().add_modifier(Modifier::BOLD),
            ))),
        ];
        for section in Section::ALL {
            lines.push(
                DocLine::new(Line::from(vec![
                    Span::styled("  › ", self.dim()),
                    Span::styled(self.t(section.nav_key()), self.link()),
                ]))
                .target(DocTarget::Section(section)),
            );
        }
        lines.push(DocLine::blank());

        let year = Local::now().year().to_string();
        lines.extend(self.paragraph(
            &self
                .translator
                .t_with("footer.rights", &[("year", &year), ("owner", self.owner)]),
            self.dim(),
        ));
        lines.push(
            DocLine::new(Line::from(Span::styled(
                format!("↑ {}", self.t("footer.backToTop")),
                self.accent(),
            )))
            .target(DocTarget::Section(Section::Hero)),
        );
        lines
    }
}

/// Clock time for today's refreshes, the date otherwise
fn format_updated(updated: DateTime<Utc>, now: DateTime<Local>) -> String {
    let local = updated.with_timezone(&Local);
    if local.date_naive() == now.date_naive() {
        local.format("%H:%M").to_string()
    } else {
        local.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use folio_core::Locale;

    fn content<'a>(
        translator: &'a Translator,
        profile: &'a ProfileConfig,
        listing: &'a ProjectListing,
        contact: &'a ContactController,
    ) -> PageContent<'a> {
        PageContent {
            translator,
            theme: THEME_REGISTRY.get_or_default("folio"),
            owner: "Ana",
            profile,
            listing,
            contact,
            focus: None,
            width: 60,
        }
    }

    fn text(line: &DocLine) -> String {
        line.line
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_hero_fills_viewport() {
        let translator = Translator::new(Locale::En);
        let profile = ProfileConfig::default();
        let listing = ProjectListing::new();
        let contact = ContactController::new("x");
        let page = content(&translator, &profile, &listing, &contact);

        let hero = page.build(Section::Hero, 30);
        assert_eq!(hero.len(), 30);
        assert!(hero.iter().any(|l| text(l).contains("Hi, I'm Ana")));
        assert_eq!(
            hero.last().and_then(|l| l.target.clone()),
            Some(DocTarget::Section(Section::About))
        );

        // Tiny viewports still fit the content
        assert!(page.build(Section::Hero, 3).len() > 3);
    }

    #[test]
    fn test_skill_rows_carry_stagger_steps() {
        let translator = Translator::new(Locale::En);
        let profile = ProfileConfig::default();
        let listing = ProjectListing::new();
        let contact = ContactController::new("x");
        let page = content(&translator, &profile, &listing, &contact);

        let steps: Vec<usize> = page
            .build(Section::Skills, 30)
            .iter()
            .filter_map(|l| l.child)
            .collect();
        assert_eq!(steps.first(), Some(&0));
        assert!(steps.contains(&4));
        assert_eq!(steps.iter().max(), Some(&11));
    }

    #[test]
    fn test_projects_reflect_listing_state() {
        let translator = Translator::new(Locale::En);
        let profile = ProfileConfig::default();
        let contact = ContactController::new("x");

        let loading = ProjectListing::new();
        let page = content(&translator, &profile, &loading, &contact);
        let rows: Vec<String> = page.build(Section::Projects, 30).iter().map(text).collect();
        assert!(rows.iter().any(|r| r.contains("Loading projects")));

        let mut empty = ProjectListing::new();
        empty.apply(Ok(Vec::new()));
        let page = content(&translator, &profile, &empty, &contact);
        let rows: Vec<String> = page.build(Section::Projects, 30).iter().map(text).collect();
        assert!(rows.iter().any(|r| r.contains("No projects in this category")));
        assert!(rows.iter().any(|r| r.starts_with("Updated ")));
    }

    #[test]
    fn test_contact_rows_target_fields_and_submit() {
        let translator = Translator::new(Locale::En);
        let profile = ProfileConfig {
            email: Some("ana@example.com".to_string()),
            ..ProfileConfig::default()
        };
        let listing = ProjectListing::new();
        let contact = ContactController::new("x");
        let mut page = content(&translator, &profile, &listing, &contact);
        page.focus = Some(Field::Message);

        let lines = page.build(Section::Contact, 30);
        let message_rows = lines
            .iter()
            .filter(|l| l.target == Some(DocTarget::Field(Field::Message)))
            .count();
        // Label, two borders and the input rows
        assert_eq!(message_rows, 3 + MESSAGE_ROWS);
        assert!(lines.iter().any(|l| l.target == Some(DocTarget::Submit)));
        assert!(lines
            .iter()
            .any(|l| l.target == Some(DocTarget::Url("mailto:ana@example.com".to_string()))));
    }

    #[test]
    fn test_format_updated() {
        let now = Local::now();
        let same_day = now.with_timezone(&Utc);
        assert_eq!(format_updated(same_day, now).len(), 5);

        let old = DateTime::parse_from_rfc3339("2020-01-02T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_updated(old, now).len(), 10);
    }
}
