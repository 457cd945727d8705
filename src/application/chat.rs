use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use yansi::Paint;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::services::Conversation;
use crate::infrastructure::api::ApiClient;
use crate::infrastructure::api::GenerateOptions;

fn render_message(message: &Message) {
    if message.message_type() == MessageType::Error {
        eprintln!("{}", Paint::red(&message.text));
        return;
    }

    println!(
        "{author}: {text}",
        author = Paint::green(message.author.to_string()).bold(),
        text = message.text
    );
}

/// One session, one transcript. The whole history is replayed on every
/// exchange and dropped when the loop exits.
pub async fn start(client: &ApiClient, options: &GenerateOptions) -> Result<()> {
    println!("Say hello to start a conversation. Type /quit to leave.");

    let mut conversation = Conversation::default();

    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;

        let trimmed = line.trim();
        if trimmed == "/quit" || trimmed == "/exit" {
            return Ok(());
        }

        let seen = conversation.messages().len();
        conversation.submit(client, trimmed, options).await;

        for message in &conversation.messages()[seen..] {
            if message.author == Author::User {
                // The prompt line above already echoed it.
                continue;
            }
            render_message(message);
        }
    }
}
