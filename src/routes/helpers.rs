use std::error::Error;

const HTML_TEMPLATES: &[(&str, &str)] = &[(
    "contact_email.html",
    include_str!("../../views/contact_email.html"),
)];

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// Render one of the bundled templates. `.html` templates are autoescaped.
pub fn prepare_html_template(
    entries: &[(&str, &str)],
    template_name: &str,
) -> Result<String, tera::Error> {
    let mut ctx = tera::Context::new();
    for (key, value) in entries.iter().copied() {
        ctx.insert(key, value);
    }
    let mut tera = tera::Tera::default();
    tera.add_raw_templates(HTML_TEMPLATES.iter().copied())?;
    tera.render(template_name, &ctx)
}
