use handlebars::Handlebars;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/templates"]
#[include = "*.hbs"]
struct TemplateAssets;

/// Creates a handlebars instance with embedded templates.
pub fn create_templates<'reg>() -> anyhow::Result<Handlebars<'reg>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_embed_templates_with_extension::<TemplateAssets>(".hbs")?;
    Ok(handlebars)
}

#[cfg(test)]
mod tests {
    use super::create_templates;
    use serde_json::json;

    #[test]
    fn registers_all_pages() -> anyhow::Result<()> {
        let templates = create_templates()?;
        for name in [
            "login",
            "signup",
            "secrets",
            "search_results",
            "submit",
            "error",
            "partials/header",
            "partials/footer",
        ] {
            assert!(templates.has_template(name), "missing template {name}");
        }

        Ok(())
    }

    #[test]
    fn escapes_user_content() -> anyhow::Result<()> {
        let templates = create_templates()?;
        let page = templates.render(
            "secrets",
            &json!({
                "titles": true,
                "usersWithSecrets": [{
                    "user": { "username": "mallory" },
                    "secrets": [{
                        "title": "<b>bold</b>",
                        "message": "<script>alert(1)</script>",
                        "ageLabel": "1 day ago"
                    }]
                }]
            }),
        )?;

        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("1 day ago"));

        Ok(())
    }

    #[test]
    fn hides_titles_when_disabled() -> anyhow::Result<()> {
        let templates = create_templates()?;
        let page = templates.render("submit", &json!({ "titles": false }))?;
        assert!(!page.contains(r#"name="title""#));
        assert!(page.contains(r#"name="secret""#));

        let page = templates.render("submit", &json!({ "titles": true }))?;
        assert!(page.contains(r#"name="title""#));

        Ok(())
    }
}
