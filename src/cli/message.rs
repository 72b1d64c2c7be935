use anyhow::Result;
use folio_contact::{ContactForm, Field, HttpMessageClient, Status};

/// Submit one message through the same form flow the page uses.
pub async fn send(
    config: crate::config::Config,
    url_override: Option<String>,
    name: String,
    email: String,
    message: String,
) -> Result<()> {
    let base_url = url_override.unwrap_or(config.site.base_url);
    let client = HttpMessageClient::from_base_url(&base_url)?;

    let mut form = ContactForm::new();
    form.edit(Field::Name, name);
    form.edit(Field::Email, email);
    form.edit(Field::Message, message);

    tracing::info!(endpoint = %client.endpoint(), "Sending contact message");

    let status = form.submit(&client).await;
    let notice = form.notice().unwrap_or_default();

    match status {
        Status::Success => {
            println!("{notice}");
            Ok(())
        }
        _ => anyhow::bail!("{notice}"),
    }
}
