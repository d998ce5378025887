use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::contact::{ContactForm as FormState, Field, SubmitStatus};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub form: FormState,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

fn input_handler(on_edit: &Callback<(Field, String)>, field: Field) -> Callback<InputEvent> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit((field, input.value()));
    })
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let ContactFormProps { form, on_edit, on_submit } = props;
    let sending = form.status == SubmitStatus::Sending;

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_message = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((Field::Message, area.value()));
        })
    };

    let notice = match form.status {
        SubmitStatus::Success => html! {
            <span class="form-notice success">{"Спасибо! Мы скоро ответим."}</span>
        },
        SubmitStatus::Error => html! {
            <span class="form-notice error">{"Что-то пошло не так. Попробуйте ещё раз."}</span>
        },
        _ => html! {},
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <div>
                    <label for="contact-name">{"Имя"}</label>
                    <input
                        id="contact-name"
                        name="name"
                        required=true
                        placeholder="Как к вам обращаться"
                        value={form.draft.name.clone()}
                        oninput={input_handler(on_edit, Field::Name)}
                    />
                </div>
                <div>
                    <label for="contact-company">{"Компания"}</label>
                    <input
                        id="contact-company"
                        name="company"
                        placeholder="Необязательно"
                        value={form.draft.company.clone()}
                        oninput={input_handler(on_edit, Field::Company)}
                    />
                </div>
            </div>
            <div>
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    required=true
                    placeholder="куда ответить"
                    value={form.draft.email.clone()}
                    oninput={input_handler(on_edit, Field::Email)}
                />
            </div>
            <div>
                <label for="contact-message">{"Кратко о задаче"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="4"
                    required=true
                    placeholder="Нужен сайт, айдентика, продвижение…"
                    value={form.draft.message.clone()}
                    oninput={on_message}
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="pill-button" disabled={sending}>
                    { if sending { "Отправляем…" } else { "Отправить запрос" } }
                    {" →"}
                </button>
                {notice}
            </div>
            <p class="form-footnote">
                {"Заявка уходит на наш сервер, который может пересылать её в почту или Telegram."}
            </p>
        </form>
    }
}
