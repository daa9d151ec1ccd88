//! Reply texts for the reporting conversation

use crate::absence::entities::Field;
use crate::absence::group::GroupOptions;
use crate::conversation::reply::Reply;

/// Templates for the reply sent at each step
pub struct ReplyTemplate;

impl ReplyTemplate {
    /// Sent on `/start`: greets and offers the group menu
    pub fn group_choice(groups: &GroupOptions) -> Reply {
        Reply::menu(
            "Welcome to the Kindergarten bot! Which group is your child in?",
            groups.labels(),
        )
    }

    /// Sent when the group answer is not one of the menu labels
    pub fn group_choice_again(groups: &GroupOptions) -> Reply {
        Reply::menu("Please tap one of the groups in the menu", groups.labels())
    }

    /// Prompt for the field that comes next
    pub fn ask_for(field: Field, groups: &GroupOptions) -> Reply {
        match field {
            Field::Group => Self::group_choice(groups),
            Field::LastName => Reply::prompt("Ok! Write the child's last name please"),
            Field::FirstName => Reply::prompt("Write the child's first name please"),
            Field::BirthDate => Reply::prompt("Write the child's birthdate (dd.mm.yy)"),
        }
    }

    pub fn recorded() -> Reply {
        Reply::closing("Successfully! Goodbye! Or /start again")
    }

    pub fn not_found() -> Reply {
        Reply::closing("I can't find this child, try again with /start, please")
    }

    pub fn cancelled() -> Reply {
        Reply::closing("Bye! Send /start whenever you need to report an absence")
    }

    /// Sent when no report is in progress
    pub fn start_hint() -> Reply {
        Reply::menu(
            "Send /start to report that your child will not come",
            vec!["/start".to_string()],
        )
    }

    /// Sent for an unknown command while a report is in progress
    pub fn unknown_command(command: &str) -> Reply {
        Reply::prompt(format!(
            "I don't know {}. Keep answering, or send /cancel to stop",
            command
        ))
    }

    /// Sent by the transport when the report could not be written
    pub fn not_saved() -> Reply {
        Reply::closing(
            "Sorry, your report could not be saved. Please try again later with /start",
        )
    }
}
