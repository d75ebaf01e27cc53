use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn with_outcome(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_outcome(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_outcome(title, false)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Informational line, shown with the success icon
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);
        b.add_empty();

        for (label, count) in &self.stats {
            b.add_line(format!("{} {}", count, label));
        }

        let sections = [(Icon::Success, &self.infos), (Icon::Warning, &self.warnings)];
        for (icon, lines) in sections {
            if lines.is_empty() {
                continue;
            }
            b.add_empty();
            for line in lines {
                b.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    line
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
