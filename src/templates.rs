use anyhow::Context;
use handlebars::{no_escape, Handlebars};

/// Creates the registry with all message templates. Messages are sent as plain text, so the
/// HTML escaping is disabled.
pub fn create_templates() -> anyhow::Result<Handlebars<'static>> {
    let mut templates = Handlebars::new();
    templates.set_strict_mode(true);
    templates.register_escape_fn(no_escape);

    templates
        .register_template_string("task_reminder", include_str!("templates/task_reminder.hbs"))
        .with_context(|| "Cannot register `task_reminder` template.")?;

    Ok(templates)
}
