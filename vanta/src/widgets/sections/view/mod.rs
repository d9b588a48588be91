mod analytics;
mod authority;
mod community;
mod education;
mod home;
mod protection;
mod settings;
mod verify;

use iced::widget::{Column, column, text};
use iced::{Element, Length, Theme};
use vanta_nav::{SectionId, SectionRegistry, ViewportClass};

use super::event::SectionsIntent;
use super::model::{Feature, Stat};
use super::state::SectionsState;
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::grid::{columns_for, grid};
use crate::theme::ThemeProps;

const PAGE_SPACING: f32 = 24.0;
const PAGE_MAX_WIDTH: f32 = 1120.0;

pub(crate) type SectionElement<'a> =
    Element<'a, SectionsIntent, Theme, iced::Renderer>;

/// A section panel renderer.
pub(crate) type SectionView = for<'a> fn(SectionProps<'a>) -> SectionElement<'a>;

/// Props handed to every section panel.
#[derive(Clone, Copy)]
pub(crate) struct SectionProps<'a> {
    pub(crate) state: &'a SectionsState,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) viewport: ViewportClass,
}

/// Registry holding one renderer per section, home as the fallback.
pub(crate) fn registry() -> SectionRegistry<SectionView> {
    SectionRegistry::new(home::view as SectionView)
        .register(SectionId::Verify, verify::view)
        .register(SectionId::Education, education::view)
        .register(SectionId::Community, community::view)
        .register(SectionId::Protection, protection::view)
        .register(SectionId::Analytics, analytics::view)
        .register(SectionId::Authority, authority::view)
        .register(SectionId::Settings, settings::view)
}

/// Stack page blocks vertically with the shared spacing and width cap.
fn page(blocks: Vec<SectionElement<'_>>) -> SectionElement<'_> {
    Column::with_children(blocks)
        .spacing(PAGE_SPACING)
        .width(Length::Fill)
        .max_width(PAGE_MAX_WIDTH)
        .into()
}

fn stats_grid<'a>(
    stats: &'static [Stat],
    props: SectionProps<'a>,
) -> SectionElement<'a> {
    let tiles: Vec<SectionElement<'a>> = stats
        .iter()
        .map(|stat| card::stat_tile(stat.value, stat.label, props.theme))
        .collect();
    grid(tiles, columns_for(props.viewport, stats.len()))
}

fn feature_card<'a>(
    feature: &'static Feature,
    theme: ThemeProps<'a>,
) -> SectionElement<'a> {
    card::card(
        column![
            text(feature.title)
                .size(16)
                .font(BOLD)
                .color(theme.palette().text),
            card::muted(feature.description, theme),
        ]
        .spacing(6),
        theme,
    )
}

fn feature_grid<'a>(
    features: &'static [Feature],
    max_columns: usize,
    props: SectionProps<'a>,
) -> SectionElement<'a> {
    let cards: Vec<SectionElement<'a>> = features
        .iter()
        .map(|feature| feature_card(feature, props.theme))
        .collect();
    grid(cards, columns_for(props.viewport, max_columns))
}
