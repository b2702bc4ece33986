//! Form submissions: `properties review`, `properties quote` and `contact`.

use crate::api::{ContactRequest, QuoteRequest, ReviewRequest};
use crate::cli::args::{ContactArgs, QuoteArgs, ReviewArgs};
use crate::error::{Result, RooflineError};
use crate::property::PropertyId;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// The `properties review` command.
pub struct ReviewCommand {
    context: CommandContext,
    args: ReviewArgs,
}

impl ReviewCommand {
    pub fn new(context: &CommandContext, args: ReviewArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ReviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = self.args.id.trim();
        if id.is_empty() {
            return Err(RooflineError::InvalidInput {
                message: "listing id is required".to_string(),
            });
        }

        let review = ReviewRequest {
            name: self.args.name.trim().to_string(),
            message: self.args.message.trim().to_string(),
            rating: self.args.rating,
        };
        review.validate()?;

        self.context.api_client()?.submit_review(id, &review)?;
        ui.success(&format!("Posted your {}-star review of {}", review.rating, id));
        Ok(CommandResult::success())
    }
}

/// The `properties quote` command.
pub struct QuoteCommand {
    context: CommandContext,
    args: QuoteArgs,
}

impl QuoteCommand {
    pub fn new(context: &CommandContext, args: QuoteArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for QuoteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let quote = QuoteRequest {
            property_id: PropertyId::new(self.args.id.trim()),
            name: self.args.name.trim().to_string(),
            email: self.args.email.trim().to_string(),
            contact_number: self.args.phone.trim().to_string(),
            message: optional(&self.args.message),
        };
        quote.validate()?;

        self.context.api_client()?.request_quote(&quote)?;
        ui.success(&format!(
            "Quote requested for {}; an agent will call {}",
            quote.property_id, quote.contact_number
        ));
        Ok(CommandResult::success())
    }
}

/// The `contact` command.
pub struct ContactCommand {
    context: CommandContext,
    args: ContactArgs,
}

impl ContactCommand {
    pub fn new(context: &CommandContext, args: ContactArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ContactCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = ContactRequest {
            name: self.args.name.trim().to_string(),
            email: self.args.email.trim().to_string(),
            phone: self.args.phone.trim().to_string(),
            budget: optional(&self.args.budget),
            message: self.args.message.trim().to_string(),
        };
        request.validate()?;

        self.context.api_client()?.contact(&request)?;
        ui.success("Message sent; we will get back to you soon");
        Ok(CommandResult::success())
    }
}
