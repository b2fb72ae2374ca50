pub trait Book: Sync + Send {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}

// BookEntity is a catalog record. Titles are not unique and an entity is never
// changed once it has been added.
#[derive(Debug, Clone, PartialEq)]
pub struct BookEntity {
    title: String,
    author: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}
