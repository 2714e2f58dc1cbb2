use serde_json::json;

use crate::ui::signin::{FocusField, FormView, SignInSnapshot};

/// One JSON line: state value, context, derived view and focused control.
pub fn render_json(snapshot: &SignInSnapshot, focus: Option<FocusField>) -> String {
    json!({
        "state": snapshot.state,
        "context": snapshot.context,
        "view": FormView::from_state(&snapshot.state),
        "focus": focus.map(|field| field.label()),
    })
    .to_string()
}

/// Human-readable block describing the form.
pub fn render_text(snapshot: &SignInSnapshot, focus: Option<FocusField>) -> String {
    let view = FormView::from_state(&snapshot.state);
    let context = serde_json::to_string(&snapshot.context).unwrap_or_default();

    let mut lines = vec![
        format!("state:   {}", snapshot.state),
        format!("context: {}", context),
    ];
    if let Some(message) = view.email_error {
        lines.push(format!("email:    {}", message));
    }
    if let Some(message) = view.password_error {
        lines.push(format!("password: {}", message));
    }
    if let Some(message) = view.service_error {
        lines.push(format!("service:  {}", message));
    }

    let mut submit = format!("[{}]", view.submit_label);
    if view.submit_disabled {
        submit.push_str(" (disabled)");
    }
    lines.push(submit);

    if let Some(field) = focus {
        lines.push(format!("focus:   {}", field.label()));
    }
    if view.authenticated {
        lines.push("authenticated".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::signin::{EmailErr, SignInContext, SignInState};

    fn bad_email() -> SignInSnapshot {
        SignInSnapshot::new(
            SignInState::EmailErr(EmailErr::BadFormat),
            SignInContext {
                email: "nope".into(),
                password: String::new(),
            },
        )
    }

    #[test]
    fn text_shows_error_and_disabled_submit() {
        let text = render_text(&bad_email(), Some(FocusField::Email));
        assert!(text.contains("state:   emailErr.badFormat"));
        assert!(text.contains("email format doesn't look right"));
        assert!(text.contains("[sign in] (disabled)"));
        assert!(text.contains("focus:   email"));
    }

    #[test]
    fn json_carries_state_value_and_view() {
        let line = render_json(&bad_email(), None);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["state"], json!({ "emailErr": "badFormat" }));
        assert_eq!(value["context"]["email"], "nope");
        assert_eq!(value["view"]["submit_disabled"], true);
        assert!(value["focus"].is_null());
    }
}
