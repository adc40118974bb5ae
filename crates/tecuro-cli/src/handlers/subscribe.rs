use anyhow::Result;
use tecuro_runtime::NewsletterForm;

use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::SubscribeViewModel;

pub fn handle(email: String, consent: bool, renderer: &ConsoleRenderer) -> Result<()> {
    let mut form = NewsletterForm::new(email, consent);
    let message = form.submit();

    renderer.render(SubscribeViewModel::from(&message))?;

    if !message.is_success() {
        anyhow::bail!("subscription was not accepted");
    }
    Ok(())
}
