//! HTML templates for widget views.
//!
//! Interactive elements carry a `data-action` attribute holding the string
//! form of an [`Action`]; the surface reads it back when the element is
//! clicked. Drag sources carry `data-label`, drop targets `data-drop-item`.
//! Values are escaped by askama; nested templates are inserted with `safe`.

use askama::Template;
use storagetutor_core::view::{
    CarouselView, ChoiceState, FeedbackView, LessonView, NavView, PuzzleView, QuestionView,
    QuizView, ResultView, SectionView, SidebarView, WidgetView,
};
use storagetutor_core::{Action, Direction};

use crate::renderer::{RenderResult, RendererError};

/// Previous/next controls shared by sections and carousels.
#[derive(Template)]
#[template(
    source = r#"<div class="{{ class }}">
<button type="button" class="nav-prev" data-action="prev"{% if !nav.can_previous %} disabled{% endif %}>Previous</button>
<span class="position">{{ nav.position }}</span>
<button type="button" class="nav-next" data-action="next"{% if !nav.can_next %} disabled{% endif %}>Next</button>
</div>"#,
    ext = "html"
)]
struct NavControls<'a> {
    class: &'a str,
    nav: &'a NavView,
}

struct SidebarLink<'a> {
    title: &'a str,
    active: bool,
    action: String,
}

#[derive(Template)]
#[template(
    source = r#"<nav class="sidebar{% if view.collapsed %} collapsed{% endif %}{% if view.compact %} compact{% endif %}">
<button type="button" class="sidebar-toggle" data-action="toggle-sidebar" aria-expanded="{{ !view.collapsed }}">Menu</button>
<ul class="sidebar-entries">
{% for link in links %}<li class="sidebar-entry{% if link.active %} active{% endif %}"><button type="button" class="sidebar-link" data-action="{{ link.action }}">{{ link.title }}</button></li>
{% endfor %}</ul>
</nav>"#,
    ext = "html"
)]
struct SidebarTemplate<'a> {
    view: &'a SidebarView,
    links: Vec<SidebarLink<'a>>,
}

#[derive(Template)]
#[template(
    source = r#"<section class="section" data-section="{{ view.id }}">
{% if view.loading %}<div class="loading">Loading...</div>
{% else %}<h1>{{ view.title }}</h1>
{% if let Some(lesson) = lesson %}{% for paragraph in lesson.paragraphs %}<p>{{ paragraph }}</p>
{% endfor %}{% if !lesson.key_points.is_empty() %}<h2>Key points</h2>
<ul class="key-points">
{% for point in lesson.key_points %}<li>{{ point }}</li>
{% endfor %}</ul>
{% endif %}{% endif %}{% if let Some(container) = view.widget_container %}<div id="{{ container }}" class="widget"></div>
{% endif %}{{ nav|safe }}
{% endif %}</section>"#,
    ext = "html"
)]
struct SectionTemplate<'a> {
    view: &'a SectionView,
    lesson: Option<&'a LessonView>,
    nav: NavControls<'a>,
}

struct Dot {
    number: usize,
    active: bool,
    action: String,
}

#[derive(Template)]
#[template(
    source = r#"<div class="{{ class }}">
<h2>{{ view.heading }}</h2>
<article class="card" data-card="{{ view.card.id }}">
<h3>{{ view.card.title }}</h3>
<p class="subtitle">{{ view.card.subtitle }}</p>
<p class="summary">{{ view.card.body }}</p>
{% for facts in view.card.facts %}<h4>{{ facts.label }}</h4>
<ul>
{% for value in facts.values %}<li>{{ value }}</li>
{% endfor %}</ul>
{% endfor %}</article>
{{ nav|safe }}
<div class="dots">
{% for dot in dots %}<button type="button" class="dot{% if dot.active %} active{% endif %}" data-action="{{ dot.action }}" aria-label="Card {{ dot.number }}"></button>
{% endfor %}</div>
</div>"#,
    ext = "html"
)]
struct CarouselTemplate<'a> {
    class: &'static str,
    view: &'a CarouselView,
    nav: NavControls<'a>,
    dots: Vec<Dot>,
}

struct ChoiceButton<'a> {
    class: &'static str,
    text: &'a str,
    open: bool,
    action: String,
}

#[derive(Template)]
#[template(
    source = r#"<div class="quiz">
<p class="position">Question {{ view.position }}</p>
<h3 class="prompt">{{ view.prompt }}</h3>
<ul class="choices">
{% for choice in choices %}<li><button type="button" class="{{ choice.class }}" data-action="{{ choice.action }}"{% if !choice.open %} disabled{% endif %}>{{ choice.text }}</button></li>
{% endfor %}</ul>
{% if let Some(feedback) = feedback %}<div class="feedback {% if feedback.correct %}correct{% else %}incorrect{% endif %}"><strong>{% if feedback.correct %}Correct!{% else %}Not quite.{% endif %}</strong> {{ feedback.explanation }}</div>
{% endif %}<div class="quiz-nav">
<button type="button" class="nav-prev" data-action="prev"{% if !view.can_previous %} disabled{% endif %}>Previous</button>
<button type="button" class="nav-next" data-action="advance"{% if !view.can_advance %} disabled{% endif %}>{% if view.finishes %}Finish{% else %}Next{% endif %}</button>
</div>
</div>"#,
    ext = "html"
)]
struct QuestionTemplate<'a> {
    view: &'a QuestionView,
    choices: Vec<ChoiceButton<'a>>,
    feedback: Option<&'a FeedbackView>,
}

#[derive(Template)]
#[template(
    source = r#"<div class="{{ kind }} tier-{{ view.performance.tier.name() }}">
<h3>Score: {{ view.score }} / {{ view.total }} ({{ view.percentage }}%)</h3>
<p class="performance">{{ view.performance.label }}</p>
<ol class="review">
{% for row in view.review %}<li class="{% if row.is_correct %}correct{% else %}incorrect{% endif %}"><span class="prompt">{{ row.prompt }}</span> <span class="chosen">{% if let Some(chosen) = row.chosen %}Your answer: {{ chosen }}{% else %}No answer{% endif %}</span> <span class="answer">Correct: {{ row.correct }}</span></li>
{% endfor %}</ol>
<button type="button" class="restart" data-action="restart">{{ restart }}</button>
</div>"#,
    ext = "html"
)]
struct ResultTemplate<'a> {
    kind: &'static str,
    view: &'a ResultView,
    restart: &'static str,
}

struct Slot<'a> {
    index: usize,
    class: &'static str,
    prompt: &'a str,
    placed: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<div class="puzzle">
<p class="progress">Score: {{ view.score }} | Placed {{ view.answered }} of {{ view.total }}</p>
<div class="labels">
{% for label in view.labels %}<div class="label" draggable="true" data-label="{{ label }}">{{ label }}</div>
{% endfor %}</div>
<ol class="slots">
{% for slot in slots %}<li class="{{ slot.class }}" data-drop-item="{{ slot.index }}"><span class="prompt">{{ slot.prompt }}</span> <span class="placed">{{ slot.placed }}</span></li>
{% endfor %}</ol>
{{ result|safe }}
</div>"#,
    ext = "html"
)]
struct PuzzleTemplate<'a> {
    view: &'a PuzzleView,
    slots: Vec<Slot<'a>>,
    result: String,
}

/// Render any widget view as HTML.
pub fn render_view(view: &WidgetView) -> RenderResult<String> {
    let html = match view {
        WidgetView::Sidebar(sidebar) => sidebar_template(sidebar).render(),
        WidgetView::Section(section) => section_template(section).render(),
        WidgetView::Carousel(carousel) => carousel_template(carousel).render(),
        WidgetView::Quiz(QuizView::Question(question)) => question_template(question).render(),
        WidgetView::Quiz(QuizView::Result(result)) => ResultTemplate {
            kind: "quiz-result",
            view: result,
            restart: "Retake quiz",
        }
        .render(),
        WidgetView::Puzzle(puzzle) => puzzle_template(puzzle).and_then(|t| t.render()),
    };
    html.map_err(|e| RendererError::Template(e.to_string()))
}

fn sidebar_template(view: &SidebarView) -> SidebarTemplate<'_> {
    let links = view
        .entries
        .iter()
        .map(|entry| SidebarLink {
            title: entry.title,
            active: entry.active,
            action: Action::OpenSection(entry.index).to_string(),
        })
        .collect();
    SidebarTemplate { view, links }
}

fn section_template(view: &SectionView) -> SectionTemplate<'_> {
    SectionTemplate {
        view,
        lesson: view.lesson.as_ref(),
        nav: NavControls {
            class: "section-nav",
            nav: &view.nav,
        },
    }
}

fn carousel_template(view: &CarouselView) -> CarouselTemplate<'_> {
    let class = match view.transition {
        Some(Direction::Forward) => "carousel slide-forward",
        Some(Direction::Backward) => "carousel slide-backward",
        None => "carousel",
    };
    let dots = (0..view.nav.position.total)
        .map(|index| Dot {
            number: index + 1,
            active: index == view.nav.active,
            action: Action::GoTo(index).to_string(),
        })
        .collect();
    CarouselTemplate {
        class,
        view,
        nav: NavControls {
            class: "carousel-nav",
            nav: &view.nav,
        },
        dots,
    }
}

fn choice_class(state: ChoiceState) -> &'static str {
    match state {
        ChoiceState::Open => "choice",
        ChoiceState::Correct => "choice correct",
        ChoiceState::Incorrect => "choice incorrect",
        ChoiceState::Revealed => "choice revealed",
        ChoiceState::Locked => "choice locked",
    }
}

fn question_template(view: &QuestionView) -> QuestionTemplate<'_> {
    let choices = view
        .choices
        .iter()
        .map(|choice| ChoiceButton {
            class: choice_class(choice.state),
            text: choice.text,
            open: choice.state == ChoiceState::Open,
            action: Action::Answer(choice.index).to_string(),
        })
        .collect();
    QuestionTemplate {
        view,
        choices,
        feedback: view.feedback.as_ref(),
    }
}

fn puzzle_template(view: &PuzzleView) -> askama::Result<PuzzleTemplate<'_>> {
    let slots = view
        .slots
        .iter()
        .map(|slot| Slot {
            index: slot.index,
            class: match slot.correct {
                None => "slot",
                Some(true) => "slot filled correct",
                Some(false) => "slot filled incorrect",
            },
            prompt: slot.prompt,
            placed: slot.placed.as_deref().unwrap_or("Drop a service here"),
        })
        .collect();
    let result = match &view.result {
        Some(result) => ResultTemplate {
            kind: "puzzle-result",
            view: result,
            restart: "Play again",
        }
        .render()?,
        None => String::new(),
    };
    Ok(PuzzleTemplate {
        view,
        slots,
        result,
    })
}
