//! The `newsletter` command.

use crate::api::NewsletterRequest;
use crate::cli::args::NewsletterArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

pub struct NewsletterCommand {
    context: CommandContext,
    args: NewsletterArgs,
}

impl NewsletterCommand {
    pub fn new(context: &CommandContext, args: NewsletterArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for NewsletterCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = NewsletterRequest {
            email: self.args.email.trim().to_string(),
            name: self.args.name.clone().filter(|n| !n.trim().is_empty()),
        };
        request.validate()?;

        let client = self.context.api_client()?;
        let message = client.subscribe_newsletter(&request)?;
        ui.success(&message);
        Ok(CommandResult::success())
    }
}
