use crate::shared::components::TruncatedText;
use contracts::domain::a001_item::aggregate::Qa;
use leptos::prelude::*;
use thaw::*;

/// Trimmed question text, `None` when there is nothing to send
pub fn normalize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Input with a "Preguntar" button; Enter submits too
#[component]
pub fn QuestionBar(on_ask: Callback<String>) -> impl IntoView {
    let text = RwSignal::new(String::new());

    let submit = move || {
        if let Some(question) = normalize_question(&text.get_untracked()) {
            on_ask.run(question);
            text.set(String::new());
        }
    };

    view! {
        <div class="question-bar">
            <input
                class="question-bar__input"
                type="text"
                placeholder="Escribe tu pregunta..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || normalize_question(&text.get()).is_none())
                on_click=move |_| submit()
            >
                "Preguntar"
            </Button>
        </div>
    }
}

#[component]
pub fn QuestionsList(questions: Vec<Qa>, max_len: usize) -> impl IntoView {
    if questions.is_empty() {
        return view! {
            <p class="questions__empty">"No hay preguntas aún. ¡Sé el primero en preguntar!"</p>
        }
        .into_any();
    }

    view! {
        <div class="questions">
            {questions
                .into_iter()
                .map(|qa| {
                    view! {
                        <div class="question">
                            <p class="question__text">{qa.question}</p>
                            <div class="question__answer">
                                <TruncatedText
                                    text=qa.answer
                                    max_len=max_len
                                    class="question__answer-text"
                                />
                                <span class="question__date">{qa.date}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_question() {
        assert_eq!(normalize_question(""), None);
        assert_eq!(normalize_question("   \t"), None);
        assert_eq!(
            normalize_question("  ¿Tiene garantía? "),
            Some("¿Tiene garantía?".to_string())
        );
    }
}
