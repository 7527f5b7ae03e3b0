use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Star,
    Cart,
    Bullet,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Star) => theme::icons::STAR,
            (true, Icon::Cart) => theme::icons::CART,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Star) => theme::icons_ascii::STAR,
            (false, Icon::Cart) => theme::icons_ascii::CART,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Star => theme::colors::WARNING,
            Icon::Cart => theme::colors::INFO,
            Icon::Bullet => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}
