#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl ToString for Author {
    fn to_string(&self) -> String {
        match self {
            Author::User => return String::from("You"),
            Author::Bot => return String::from("Gemini"),
        }
    }
}
