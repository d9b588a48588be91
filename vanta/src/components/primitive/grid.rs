use iced::widget::{Column, Row};
use iced::{Element, Length};
use vanta_nav::ViewportClass;

const GRID_SPACING: f32 = 16.0;

/// Number of columns a grid of `max` columns collapses to per viewport.
pub(crate) fn columns_for(viewport: ViewportClass, max: usize) -> usize {
    let columns = match viewport {
        ViewportClass::Mobile => 1,
        ViewportClass::Tablet => 2,
        ViewportClass::Desktop => max,
    };
    columns.clamp(1, max.max(1))
}

/// Lay `items` out in rows of `columns` equal-width cells.
pub(crate) fn grid<'a, M: 'a>(
    items: Vec<Element<'a, M>>,
    columns: usize,
) -> Element<'a, M> {
    let columns = columns.max(1);
    let mut rows: Vec<Element<'a, M>> = Vec::new();
    let mut current: Vec<Element<'a, M>> = Vec::with_capacity(columns);

    for item in items {
        current.push(item);
        if current.len() == columns {
            rows.push(
                Row::with_children(std::mem::take(&mut current))
                    .spacing(GRID_SPACING)
                    .width(Length::Fill)
                    .into(),
            );
        }
    }

    if !current.is_empty() {
        let filled = current.len();
        let mut cells = current;
        // Pad the last row so its cells keep the same width as the others.
        for _ in filled..columns {
            cells.push(iced::widget::Space::new().width(Length::Fill).into());
        }
        rows.push(
            Row::with_children(cells)
                .spacing(GRID_SPACING)
                .width(Length::Fill)
                .into(),
        );
    }

    Column::with_children(rows)
        .spacing(GRID_SPACING)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use vanta_nav::ViewportClass;

    use super::columns_for;

    #[test]
    fn given_viewport_classes_when_resolving_columns_then_narrower_uses_fewer()
    {
        assert_eq!(columns_for(ViewportClass::Mobile, 4), 1);
        assert_eq!(columns_for(ViewportClass::Tablet, 4), 2);
        assert_eq!(columns_for(ViewportClass::Desktop, 4), 4);
    }

    #[test]
    fn given_single_column_grid_when_resolving_on_tablet_then_never_exceeds_max()
    {
        assert_eq!(columns_for(ViewportClass::Tablet, 1), 1);
        assert_eq!(columns_for(ViewportClass::Desktop, 0), 1);
    }
}
