//! Plain-text templates, for terminal previews of widget views.

use askama::Template;
use storagetutor_core::view::{
    CarouselView, PuzzleView, QuestionView, QuizView, ResultView, SectionView, SidebarView,
    WidgetView,
};

use crate::renderer::{RenderResult, RendererError};

#[derive(Template)]
#[template(
    source = r#"{% for entry in view.entries %}{% if entry.active %}> {% else %}  {% endif %}{{ entry.title }}
{% endfor %}[{% if view.collapsed %}Show{% else %}Hide{% endif %} menu]"#,
    ext = "txt"
)]
struct SidebarText<'a> {
    view: &'a SidebarView,
}

#[derive(Template)]
#[template(
    source = r#"# {{ view.title }}
{% if view.loading %}Loading...{% else %}{% if let Some(lesson) = view.lesson.as_ref() %}{% for paragraph in lesson.paragraphs %}
{{ paragraph }}
{% endfor %}{% if !lesson.key_points.is_empty() %}
Key points:
{% for point in lesson.key_points %}  - {{ point }}
{% endfor %}{% endif %}{% endif %}
[Previous] {{ view.nav.position }} [Next]{% endif %}"#,
    ext = "txt"
)]
struct SectionText<'a> {
    view: &'a SectionView,
}

#[derive(Template)]
#[template(
    source = r#"## {{ view.heading }} ({{ view.nav.position }})
{{ view.card.title }}: {{ view.card.subtitle }}
{{ view.card.body }}
{% for facts in view.card.facts %}{{ facts.label }}:
{% for value in facts.values %}  - {{ value }}
{% endfor %}{% endfor %}"#,
    ext = "txt"
)]
struct CarouselText<'a> {
    view: &'a CarouselView,
}

#[derive(Template)]
#[template(
    source = r#"Question {{ view.position }}: {{ view.prompt }}
{% for choice in view.choices %}  {{ choice.index + 1 }}. {{ choice.text }}
{% endfor %}{% if let Some(feedback) = view.feedback.as_ref() %}{% if feedback.correct %}Correct!{% else %}Not quite.{% endif %} {{ feedback.explanation }}
{% endif %}[{% if view.finishes %}Finish{% else %}Next{% endif %}]"#,
    ext = "txt"
)]
struct QuestionText<'a> {
    view: &'a QuestionView,
}

#[derive(Template)]
#[template(
    source = r#"Score: {{ view.score }} / {{ view.total }} ({{ view.percentage }}%)
{{ view.performance.label }}
{% for row in view.review %}  [{% if row.is_correct %}x{% else %} {% endif %}] {{ row.prompt }} -> {{ row.correct }}
{% endfor %}[{{ restart }}]"#,
    ext = "txt"
)]
struct ResultText<'a> {
    view: &'a ResultView,
    restart: &'static str,
}

#[derive(Template)]
#[template(
    source = r#"Labels: {{ view.labels|join(", ") }}
{% for slot in view.slots %}  {{ slot.index + 1 }}. {{ slot.prompt }} -> {% if let Some(placed) = slot.placed.as_deref() %}{{ placed }}{% else %}?{% endif %}
{% endfor %}Score: {{ view.score }} | Placed {{ view.answered }} of {{ view.total }}"#,
    ext = "txt"
)]
struct PuzzleText<'a> {
    view: &'a PuzzleView,
}

/// Render any widget view as plain text.
pub fn render_text(view: &WidgetView) -> RenderResult<String> {
    let text = match view {
        WidgetView::Sidebar(view) => SidebarText { view }.render(),
        WidgetView::Section(view) => SectionText { view }.render(),
        WidgetView::Carousel(view) => CarouselText { view }.render(),
        WidgetView::Quiz(QuizView::Question(view)) => QuestionText { view }.render(),
        WidgetView::Quiz(QuizView::Result(view)) => ResultText {
            view,
            restart: "Retake quiz",
        }
        .render(),
        WidgetView::Puzzle(puzzle) => puzzle_text(puzzle),
    };
    text.map_err(|e| RendererError::Template(e.to_string()))
}

fn puzzle_text(view: &PuzzleView) -> askama::Result<String> {
    let board = PuzzleText { view }.render()?;
    match &view.result {
        Some(result) => {
            let result = ResultText {
                view: result,
                restart: "Play again",
            }
            .render()?;
            Ok(format!("{}\n{}", board, result))
        }
        None => Ok(board),
    }
}
