//! Content renderers, one per [`Section`].
//!
//! Each renderer produces plain `ratatui` lines; the frame layout decides
//! where they go and how they scroll. Renderers read the profile and the
//! catalog, never the interpreter.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::{Catalog, ProjectFilter, ProjectStatus, Publication, PublicationKind, PublicationStatus};
use crate::interpreter::Section;
use crate::profile::Profile;
use crate::widgets::{badge, blank, bullet, heading, label_value, level_bar, shell_line, subheading, UiColors};

/// Inputs shared by every section renderer.
pub struct SectionView<'a> {
    pub profile: &'a Profile,
    pub catalog: &'a dyn Catalog,
    pub colors: &'a UiColors,
    /// Revealed part of the home welcome line.
    pub typed: &'a str,
}

/// The fake shell command each section "runs".
pub fn shell_command(section: Section) -> &'static str {
    match section {
        Section::Home => "./welcome.sh",
        Section::About => "cat about.md",
        Section::Projects => "ls -la projects/",
        Section::Skills => "./skills.sh --verbose",
        Section::Publications => "cat publications.bib",
        Section::Contact => "cat contact.info",
    }
}

pub fn render_lines(section: Section, view: &SectionView) -> Vec<Line<'static>> {
    let mut lines = vec![shell_line(shell_command(section), view.colors), blank()];
    match section {
        Section::Home => home(view, &mut lines),
        Section::About => about(view, &mut lines),
        Section::Projects => projects(view, &mut lines),
        Section::Skills => skills(view, &mut lines),
        Section::Publications => publications(view, &mut lines),
        Section::Contact => contact(view, &mut lines),
    }
    lines
}

fn home(view: &SectionView, lines: &mut Vec<Line<'static>>) {
    let colors = view.colors;
    let profile = view.profile;

    for row in profile.banner.lines() {
        lines.push(Line::from(Span::styled(
            row.to_string(),
            Style::default().fg(colors.heading),
        )));
    }
    lines.push(blank());

    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(colors.prompt)),
        Span::styled(view.typed.to_string(), Style::default().fg(colors.text)),
        Span::styled(
            "▌",
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(colors.prompt)),
        Span::styled("I'm a ", Style::default().fg(colors.text)),
        Span::styled(profile.role.to_string(), Style::default().fg(colors.link)),
        Span::styled(format!(" {}", profile.tagline), Style::default().fg(colors.text)),
    ]));
    lines.push(bullet(profile.hint, colors));
    lines.push(blank());

    lines.push(Line::from(Span::styled(
        "⚡ Quick Stats:",
        Style::default().fg(colors.subheading),
    )));
    let mut stats = Vec::new();
    for (i, (label, value)) in profile.stats.iter().enumerate() {
        if i > 0 {
            stats.push(Span::styled("   ", Style::default()));
        }
        stats.push(Span::styled(format!("{label}: "), Style::default().fg(colors.link)));
        stats.push(Span::styled(value.to_string(), Style::default().fg(colors.text)));
    }
    lines.push(Line::from(stats));
}

fn about(view: &SectionView, lines: &mut Vec<Line<'static>>) {
    let colors = view.colors;
    let profile = view.profile;

    lines.push(heading("About Me", colors));
    lines.push(blank());
    for paragraph in &profile.about {
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            Style::default().fg(colors.text),
        )));
        lines.push(blank());
    }

    lines.push(subheading("Education", colors));
    for (year, what) in &profile.education {
        lines.push(label_value(year, what, colors));
    }
    lines.push(blank());

    lines.push(subheading("Interests", colors));
    for interest in &profile.interests {
        lines.push(bullet(interest, colors));
    }
}

fn projects(view: &SectionView, lines: &mut Vec<Line<'static>>) {
    let colors = view.colors;
    let projects = view.catalog.projects(ProjectFilter::default());
    if projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "total 0",
            Style::default().fg(colors.muted),
        )));
        return;
    }

    lines.push(Line::from(Span::styled(
        format!("total {}", projects.len()),
        Style::default().fg(colors.muted),
    )));
    lines.push(blank());

    for project in projects {
        let status_color = match project.status {
            ProjectStatus::Completed => colors.success,
            ProjectStatus::InProgress => colors.warning,
            ProjectStatus::Planned => colors.muted,
        };
        let mut title = vec![
            Span::styled(
                project.name.clone(),
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(project.status.label(), status_color),
        ];
        if project.featured {
            title.push(Span::raw(" "));
            title.push(badge("featured", colors.accent));
        }
        lines.push(Line::from(title));

        lines.push(Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(colors.text),
        )));

        let mut tech = Vec::new();
        for name in &project.technologies {
            tech.push(Span::styled(
                format!(" {name} "),
                Style::default().fg(colors.text).bg(colors.panel_bg),
            ));
            tech.push(Span::raw(" "));
        }
        lines.push(Line::from(tech));

        if let Some(metrics) = &project.metrics {
            lines.push(Line::from(vec![
                Span::styled("Metrics: ", Style::default().fg(colors.prompt)),
                Span::styled(metrics.clone(), Style::default().fg(colors.muted)),
            ]));
        }
        if let Some(url) = &project.github_url {
            lines.push(label_value("[GitHub]", url, colors));
        }
        if let Some(url) = &project.demo_url {
            lines.push(label_value("[Live Demo]", url, colors));
        }
        lines.push(blank());
    }
}

fn skills(view: &SectionView, lines: &mut Vec<Line<'static>>) {
    let colors = view.colors;
    let profile = view.profile;
    let name_width = profile
        .skills
        .iter()
        .flat_map(|category| category.skills.iter())
        .map(|skill| skill.name.chars().count())
        .max()
        .unwrap_or(0);

    for category in &profile.skills {
        lines.push(subheading(category.title, colors));
        for skill in &category.skills {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", skill.name, width = name_width),
                    Style::default().fg(colors.text),
                ),
                Span::styled(level_bar(skill.level, 20), Style::default().fg(colors.success)),
                Span::styled(format!(" {:>3}%", skill.level), Style::default().fg(colors.muted)),
            ]));
        }
        lines.push(blank());
    }

    lines.push(subheading("Certifications & Achievements", colors));
    for cert in &profile.certifications {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(colors.success)),
            Span::styled(cert.to_string(), Style::default().fg(colors.text)),
        ]));
    }
    for achievement in &profile.achievements {
        lines.push(Line::from(vec![
            Span::styled("★ ", Style::default().fg(colors.warning)),
            Span::styled(achievement.to_string(), Style::default().fg(colors.text)),
        ]));
    }
}

fn publications(view: &SectionView, lines: &mut Vec<Line<'static>>) {
    let colors = view.colors;
    let all = view.catalog.publications(None);
    if all.is_empty() {
        lines.push(Line::from(Span::styled(
            "No publications yet.",
            Style::default().fg(colors.muted),
        )));
        return;
    }

    let conference = view.catalog.publications(Some(PublicationKind::Conference));
    let journal = view.catalog.publications(Some(PublicationKind::Journal));
    lines.push(Line::from(Span::styled(
        format!(
            "{} publications: {} conference, {} journal",
            all.len(),
            conference.len(),
            journal.len()
        ),
        Style::default().fg(colors.muted),
    )));
    lines.push(blank());

    for (title, group) in [("Conference Papers", conference), ("Journal Articles", journal)] {
        if group.is_empty() {
            continue;
        }
        lines.push(heading(title, colors));
        lines.push(blank());
        for publication in &group {
            publication_card(publication, colors, lines);
        }
    }
}

fn publication_card(publication: &Publication, colors: &UiColors, lines: &mut Vec<Line<'static>>) {
    let status_color = match publication.status {
        PublicationStatus::Published => colors.success,
        PublicationStatus::Accepted => colors.link,
        PublicationStatus::UnderReview => colors.warning,
    };
    lines.push(Line::from(vec![
        Span::styled(
            publication.title.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        badge(publication.status.label(), status_color),
        Span::raw(" "),
        badge(publication.kind.label(), colors.muted),
    ]));
    lines.push(label_value("Authors", &publication.authors, colors));
    lines.push(Line::from(vec![
        Span::styled("Venue: ", Style::default().fg(colors.link)),
        Span::styled(publication.venue.clone(), Style::default().fg(colors.prompt)),
        Span::styled(format!(" ({})", publication.year), Style::default().fg(colors.muted)),
    ]));
    if let Some(summary) = &publication.summary {
        lines.push(Line::from(Span::styled(
            summary.clone(),
            Style::default().fg(colors.text),
        )));
    }
    if !publication.keywords.is_empty() {
        let mut keywords = Vec::new();
        for keyword in &publication.keywords {
            keywords.push(Span::styled(
                format!(" {keyword} "),
                Style::default().fg(colors.text).bg(colors.panel_bg),
            ));
            keywords.push(Span::raw(" "));
        }
        lines.push(Line::from(keywords));
    }
    if let Some(doi) = &publication.doi {
        lines.push(label_value("[DOI]", &format!("https://doi.org/{doi}"), colors));
    }
    if let Some(url) = &publication.pdf_url {
        lines.push(label_value("[PDF]", url, colors));
    }
    lines.push(blank());
}

fn contact(view: &SectionView, lines: &mut Vec<Line<'static>>) {
    let colors = view.colors;
    let profile = view.profile;

    lines.push(heading("Get In Touch", colors));
    lines.push(blank());
    lines.push(subheading("Contact Information", colors));
    for link in &profile.contacts {
        lines.push(Line::from(vec![
            Span::styled("→ ", Style::default().fg(colors.prompt)),
            Span::styled(link.label.to_string(), Style::default().fg(colors.link)),
            Span::styled(format!("  <{}>", link.href), Style::default().fg(colors.muted)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("⌂ ", Style::default().fg(colors.prompt)),
        Span::styled(profile.location.to_string(), Style::default().fg(colors.text)),
    ]));
    lines.push(blank());

    lines.push(subheading("Status", colors));
    let dots = [colors.success, colors.link, colors.warning];
    for (i, status) in profile.availability.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(dots[i % dots.len()])),
            Span::styled(status.to_string(), Style::default().fg(colors.text)),
        ]));
    }
}
