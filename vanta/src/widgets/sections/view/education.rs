use iced::widget::{column, row, text};
use iced::{Alignment, Length};

use super::{SectionElement, SectionProps, page, stats_grid};
use crate::components::primitive::card::{self, BOLD};
use crate::components::primitive::grid::{columns_for, grid};
use crate::components::primitive::tab_strip::{self, TabStripProps};
use crate::widgets::sections::event::SectionsIntent;
use crate::widgets::sections::model::{
    COURSES, Course, CourseCategory, EDUCATION_STATS,
};

pub(super) fn view(props: SectionProps<'_>) -> SectionElement<'_> {
    let header = card::page_header(
        "Education Center",
        "Learn about AI security, misinformation detection and digital \
         literacy",
        props.theme,
    );

    let selected = props.state.education.category;
    let filters = tab_strip::view(
        TabStripProps {
            options: &CourseCategory::ALL,
            selected,
            label: CourseCategory::label,
            theme: props.theme,
        },
        SectionsIntent::CategorySelected,
    );

    let courses: Vec<SectionElement<'_>> = COURSES
        .iter()
        .filter(|course| selected.admits(course.category))
        .map(|course| course_card(course, props))
        .collect();
    let courses = if courses.is_empty() {
        card::muted("No courses in this category yet.", props.theme)
    } else {
        grid(courses, columns_for(props.viewport, 2))
    };

    page(vec![
        header,
        stats_grid(&EDUCATION_STATS, props),
        filters,
        courses,
    ])
}

fn course_card<'a>(
    course: &Course,
    props: SectionProps<'a>,
) -> SectionElement<'a> {
    let palette = props.theme.palette();

    card::card(
        column![
            row![
                card::badge(course.category.label(), palette.primary),
                card::badge(course.difficulty, palette.info),
            ]
            .spacing(8),
            text(course.title).size(17).font(BOLD).color(palette.text),
            card::muted(course.description, props.theme),
            row![
                card::muted(course.duration, props.theme),
                card::muted(format!("{:.1} rating", course.rating), props.theme),
                card::muted(
                    format!("{} students", course.students),
                    props.theme
                ),
            ]
            .spacing(16),
        ]
        .spacing(10)
        .width(Length::Fill)
        .align_x(Alignment::Start),
        props.theme,
    )
}
