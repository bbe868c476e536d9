// SPDX-License-Identifier: MPL-2.0
//! Six fixed section tabs. Selecting one only moves the highlight.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, container, svg, tooltip, Row, Space, Svg, Text};
use iced::{Element, Length, Theme};

/// Section tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Reels,
    Marketplace,
    News,
    Notifications,
    Menu,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Reels,
        Tab::Marketplace,
        Tab::News,
        Tab::Notifications,
        Tab::Menu,
    ];

    fn icon<'a>(self) -> Svg<'a> {
        match self {
            Tab::Home => icons::home(),
            Tab::Reels => icons::tv(),
            Tab::Marketplace => icons::store(),
            Tab::News => icons::newspaper(),
            Tab::Notifications => icons::bell(),
            Tab::Menu => icons::menu(),
        }
    }

    /// Accessible label key.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "tab-home",
            Tab::Reels => "tab-reels",
            Tab::Marketplace => "tab-marketplace",
            Tab::News => "tab-news",
            Tab::Notifications => "tab-notifications",
            Tab::Menu => "tab-menu",
        }
    }
}

const UNDERLINE_HEIGHT: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    selected: usize,
}

impl State {
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_tab(&self) -> Tab {
        Tab::ALL[self.selected]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(usize),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Select(index) if index < Tab::ALL.len() => state.selected = index,
        Message::Select(index) => tracing::debug!(index, "ignoring unknown tab"),
    }
}

pub fn view<'a>(state: &State, i18n: &'a I18n) -> Element<'a, Message> {
    let tabs = Tab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| tab_button(index, *tab, index == state.selected, i18n));

    container(
        Row::with_children(tabs)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TAB_HEIGHT)),
    )
    .width(Length::Fill)
    .style(styles::container::surface)
    .into()
}

fn tab_button<'a>(index: usize, tab: Tab, selected: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let glyph = icons::sized(tab.icon(), sizing::ICON_MD).style(move |theme: &Theme, _status| {
        svg::Style {
            color: Some(styles::button::tab_icon_color(
                &ColorScheme::for_theme(theme),
                selected,
            )),
        }
    });

    // Brand underline under the selected tab.
    let underline = container(Space::new().width(Length::Fill).height(UNDERLINE_HEIGHT)).style(
        move |theme: &Theme| container::Style {
            background: selected.then(|| ColorScheme::for_theme(theme).brand.into()),
            ..Default::default()
        },
    );

    let content = column![
        container(glyph)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::TAB_HEIGHT - UNDERLINE_HEIGHT)),
        underline
    ];

    tooltip(
        button(content)
            .on_press(Message::Select(index))
            .padding(0.0)
            .width(Length::Fill)
            .style(styles::button::tab(selected)),
        Text::new(i18n.tr(tab.label_key())).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}
