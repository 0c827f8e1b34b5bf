use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::registration::{
    self, FieldError, FieldId, FieldSpec, InputKind, RegistrationDraft, RegistrationError,
    REGISTRATION_FIELDS,
};

#[derive(Properties, PartialEq)]
pub struct RegisterDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Everything the dialog shows between opening and closing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub draft: RegistrationDraft,
    pub errors: Vec<FieldError>,
    pub notice: Option<String>,
}

pub enum FormAction {
    Edit(FieldId, String),
    Rejected(Vec<FieldError>),
    Notice(String),
    Reset,
}

impl Reducible for RegisterForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.draft.set(field, value);
                next.errors.retain(|e| e.field != field);
            }
            FormAction::Rejected(errors) => {
                next.errors = errors;
                next.notice = None;
            }
            FormAction::Notice(message) => {
                next.errors.clear();
                next.notice = Some(message);
            }
            FormAction::Reset => return Rc::new(Self::default()),
        }
        Rc::new(next)
    }
}

/// A backdrop click dismisses only when the button went down on the backdrop
/// too, so a text selection dragged out of an input keeps the dialog open.
pub fn backdrop_dismisses(pressed_on_backdrop: bool, released_on_backdrop: bool) -> bool {
    pressed_on_backdrop && released_on_backdrop
}

fn on_backdrop_itself(e: &MouseEvent) -> bool {
    e.target().is_some() && e.target() == e.current_target()
}

#[function_component(RegisterDialog)]
pub fn register_dialog(props: &RegisterDialogProps) -> Html {
    let form = use_reducer(RegisterForm::default);
    let pressed_on_backdrop = use_mut_ref(|| false);

    let close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            form.dispatch(FormAction::Reset);
            on_close.emit(());
        })
    };

    {
        let close = close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let on_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (FieldId, String)| {
            form.dispatch(FormAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match registration::submit(&form.draft) {
                Ok(()) => form.dispatch(FormAction::Notice("Account created.".to_string())),
                Err(RegistrationError::Invalid(failed)) => {
                    gloo_console::log!(format!("registration rejected: {} field(s)", failed.len()));
                    form.dispatch(FormAction::Rejected(failed));
                }
                Err(err @ RegistrationError::NotImplemented) => {
                    gloo_console::log!(err.to_string());
                    form.dispatch(FormAction::Notice("Registration is not available yet.".to_string()));
                }
            }
        })
    };

    let on_backdrop_press = {
        let pressed_on_backdrop = pressed_on_backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            *pressed_on_backdrop.borrow_mut() = on_backdrop_itself(&e);
        })
    };
    let on_backdrop_click = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            let pressed = std::mem::take(&mut *pressed_on_backdrop.borrow_mut());
            if backdrop_dismisses(pressed, on_backdrop_itself(&e)) {
                close.emit(());
            }
        })
    };
    let on_close_button = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let render = |field: &'static FieldSpec| {
        let error = form.errors.iter().find(|e| e.field == field.id).cloned();
        render_field(field, form.draft.get(field.id), error, on_field.clone())
    };
    let (paired, single): (Vec<&'static FieldSpec>, Vec<&'static FieldSpec>) =
        REGISTRATION_FIELDS.iter().partition(|field| field.half_width);

    html! {
        <div class="dialog-backdrop" onmousedown={on_backdrop_press} onclick={on_backdrop_click}>
            <style>{DIALOG_CSS}</style>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="register-title"
            >
                <button class="dialog-close" aria-label="Close" onclick={on_close_button}>{"×"}</button>
                <div class="dialog-header">
                    <h2 id="register-title">{"Create Account"}</h2>
                    <p class="dialog-description">
                        {"Register to access our leak intelligence platform"}
                    </p>
                </div>
                // Checks run in `onsubmit` so failures show inline under each field.
                <form class="register-form" novalidate=true {onsubmit}>
                    <div class="field-row">
                        { for paired.into_iter().map(&render) }
                    </div>
                    { for single.into_iter().map(&render) }
                    <button type="submit" class="button-primary button-block">
                        {"Create Account"}
                    </button>
                    {
                        if let Some(message) = form.notice.as_ref() {
                            html! { <p class="form-notice" role="status">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>
        </div>
    }
}

fn render_field(
    field: &'static FieldSpec,
    value: &str,
    error: Option<FieldError>,
    on_field: Callback<(FieldId, String)>,
) -> Html {
    let id = field.id;
    let control = match field.kind {
        InputKind::Text | InputKind::Tel => {
            let input_type = if field.kind == InputKind::Tel { "tel" } else { "text" };
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_field.emit((id, input.value()));
            });
            html! {
                <input
                    type={input_type}
                    class="form-input"
                    placeholder={field.placeholder}
                    aria-label={id.label()}
                    pattern={field.pattern.map(AttrValue::from)}
                    required={field.required}
                    value={value.to_string()}
                    {oninput}
                />
            }
        }
        InputKind::Choice(options) => {
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_field.emit((id, select.value()));
            });
            html! {
                <select
                    class="form-input"
                    aria-label={id.label()}
                    required={field.required}
                    {onchange}
                >
                    <option value="" disabled=true selected={value.is_empty()}>
                        {field.placeholder}
                    </option>
                    { for options.iter().map(|(option, label)| html! {
                        <option value={*option} selected={value == *option}>{*label}</option>
                    }) }
                </select>
            }
        }
    };

    html! {
        <div class={classes!("form-field", error.is_some().then(|| "has-error"))}>
            { control }
            {
                if let Some(error) = error {
                    html! { <p class="field-error">{error.hint()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const DIALOG_CSS: &str = r#"
.dialog-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
}
.dialog {
    position: relative;
    width: calc(100% - 2rem);
    max-width: 425px;
    background: #111827;
    color: #fff;
    border: 1px solid #1f2937;
    border-radius: 0.5rem;
    padding: 1.5rem;
}
.dialog-close {
    position: absolute;
    top: 0.75rem;
    right: 0.75rem;
    background: none;
    border: none;
    color: #9ca3af;
    font-size: 1.25rem;
    cursor: pointer;
}
.dialog-header h2 {
    margin: 0 0 0.5rem;
    font-size: 1.125rem;
}
.dialog-description {
    color: #9ca3af;
    margin: 0;
    font-size: 0.875rem;
}
.register-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin-top: 1rem;
}
.field-row {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
}
.form-input {
    width: 100%;
    box-sizing: border-box;
    padding: 0.5rem 0.75rem;
    background: #1f2937;
    color: #fff;
    border: 1px solid #374151;
    border-radius: 0.375rem;
}
.form-input:invalid:not(:placeholder-shown),
.has-error .form-input {
    border-color: #f87171;
}
.field-error {
    color: #f87171;
    font-size: 0.75rem;
    margin: 0.25rem 0 0;
}
.form-notice {
    color: #fbbf24;
    text-align: center;
    margin: 0;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{position, render};
    use crate::registration::{spec_for, FieldErrorKind};

    fn open_dialog() -> String {
        render::<RegisterDialog>(RegisterDialogProps {
            open: true,
            on_close: Callback::noop(),
        })
    }

    /// The `<input ...>` tag that carries `attribute`.
    fn input_with<'a>(html: &'a str, attribute: &str) -> &'a str {
        let at = position(html, attribute);
        let start = html[..at].rfind("<input").expect("attribute sits on an input");
        let end = at + html[at..].find('>').expect("input tag is closed");
        &html[start..=end]
    }

    fn edit(form: Rc<RegisterForm>, field: FieldId, value: &str) -> Rc<RegisterForm> {
        form.reduce(FormAction::Edit(field, value.to_string()))
    }

    #[test]
    fn back_to_back_edits_all_land() {
        let form = Rc::new(RegisterForm::default());
        let form = edit(form, FieldId::FullName, "Sarah Chen");
        let form = edit(form, FieldId::PassportSeries, "AB1234567");
        let form = edit(form, FieldId::PassportSeries, "AB7654321");

        assert_eq!(form.draft.get(FieldId::FullName), "Sarah Chen");
        assert_eq!(form.draft.get(FieldId::PassportSeries), "AB7654321");
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let failed = vec![
            FieldError { field: FieldId::PassportSeries, kind: FieldErrorKind::Mismatch },
            FieldError { field: FieldId::Phone, kind: FieldErrorKind::Missing },
        ];
        let form = Rc::new(RegisterForm::default()).reduce(FormAction::Rejected(failed));
        let form = edit(form, FieldId::PassportSeries, "AB1234567");

        assert_eq!(
            form.errors,
            vec![FieldError { field: FieldId::Phone, kind: FieldErrorKind::Missing }]
        );
    }

    #[test]
    fn notice_and_rejection_replace_each_other() {
        let form = Rc::new(RegisterForm::default())
            .reduce(FormAction::Rejected(vec![FieldError {
                field: FieldId::Address,
                kind: FieldErrorKind::Missing,
            }]))
            .reduce(FormAction::Notice("Registration is not available yet.".to_string()));
        assert!(form.errors.is_empty());
        assert_eq!(form.notice.as_deref(), Some("Registration is not available yet."));

        let form = form.reduce(FormAction::Rejected(Vec::new()));
        assert_eq!(form.notice, None);
    }

    #[test]
    fn reset_forgets_everything() {
        let form = edit(Rc::new(RegisterForm::default()), FieldId::Address, "Tashkent")
            .reduce(FormAction::Notice("Account created.".to_string()))
            .reduce(FormAction::Reset);
        assert_eq!(*form, RegisterForm::default());
    }

    #[test]
    fn only_a_press_and_release_on_the_backdrop_dismiss() {
        assert!(backdrop_dismisses(true, true));
        // Drag that started inside an input and ended over the backdrop.
        assert!(!backdrop_dismisses(false, true));
        assert!(!backdrop_dismisses(true, false));
        assert!(!backdrop_dismisses(false, false));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render::<RegisterDialog>(RegisterDialogProps {
            open: false,
            on_close: Callback::noop(),
        });
        assert!(!html.contains("register-form"), "{}", html);
    }

    #[test]
    fn form_leaves_validation_to_the_submit_handler() {
        let html = open_dialog();
        let form_start = position(&html, "<form");
        let form_tag = &html[form_start..form_start + html[form_start..].find('>').unwrap()];
        assert!(form_tag.contains("novalidate"), "{}", form_tag);
    }

    #[test]
    fn passport_input_carries_pattern_and_required() {
        let html = open_dialog();
        let passport = input_with(&html, r#"pattern="^[A-Z]{2}[0-9]{7}$""#);
        assert!(passport.contains("required"), "{}", passport);
        assert!(passport.contains(r#"placeholder="Passport Series""#), "{}", passport);
    }

    #[test]
    fn every_patterned_field_is_rendered_with_its_pattern() {
        let html = open_dialog();
        for field in REGISTRATION_FIELDS.iter() {
            if let Some(pattern) = field.pattern {
                let input = input_with(&html, &format!("pattern=\"{}\"", pattern));
                assert_eq!(input.contains("required"), field.required, "{}", input);
            }
        }
        assert!(!html.contains("field-error"));
    }

    #[function_component]
    fn RejectedPassport() -> Html {
        let error = FieldError { field: FieldId::PassportSeries, kind: FieldErrorKind::Mismatch };
        render_field(spec_for(FieldId::PassportSeries), "ab1234567", Some(error), Callback::noop())
    }

    #[test]
    fn rejected_field_shows_its_message_inline() {
        let html = render::<RejectedPassport>(());
        let field = position(&html, "form-field has-error");
        let message = position(&html, r#"class="field-error""#);
        assert!(field < message);
    }
}
