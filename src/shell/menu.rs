use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use crate::core::library::{LibraryError, LibraryResult};
use crate::library::command::search_book_cmd::SearchBy;
use crate::library::domain::LibraryService;
use crate::library::factory::create_library_service;
use crate::shell::config::OutputFormat;
use crate::shell::controller;
use crate::shell::controller::AppState;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    ListBooks,
    SearchByTitle,
    SearchByAuthor,
    BorrowBook,
    ReturnBook,
    Exit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = LibraryError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        match input.trim().parse::<u32>() {
            Ok(1) => Ok(MenuChoice::AddBook),
            Ok(2) => Ok(MenuChoice::ListBooks),
            Ok(3) => Ok(MenuChoice::SearchByTitle),
            Ok(4) => Ok(MenuChoice::SearchByAuthor),
            Ok(5) => Ok(MenuChoice::BorrowBook),
            Ok(6) => Ok(MenuChoice::ReturnBook),
            Ok(7) => Ok(MenuChoice::Exit),
            Ok(other) => Err(LibraryError::validation(
                format!("no menu option {}", other).as_str())),
            Err(err) => Err(LibraryError::validation(
                format!("menu choice {:?} is not a number: {}", input, err).as_str())),
        }
    }
}

// Shell is the interactive loop. It owns the one LibraryService of the
// process and hands it to each dispatched command.
pub struct Shell<R, W> {
    state: AppState,
    library_service: Box<dyn LibraryService>,
    reader: R,
    writer: W,
}

impl<R, W> Shell<R, W>
    where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
    pub fn new(state: AppState, reader: R, writer: W) -> Self {
        Self {
            library_service: create_library_service(&state.config),
            state,
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    // Runs until the exit option is chosen or input is exhausted.
    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            let messages = self.state.messages();
            self.prompt(messages.menu()).await?;
            let Some(line) = self.read_prompted(messages.choice_prompt()).await? else {
                debug!("input closed at menu");
                return Ok(());
            };
            let choice = match MenuChoice::try_from(line.as_str()) {
                Ok(choice) => choice,
                Err(err) => {
                    warn!("rejected menu input: {}", err);
                    let out = controller::invalid_choice(&self.state, line.as_str())?;
                    self.write_line(out.as_str()).await?;
                    continue;
                }
            };
            if choice == MenuChoice::Exit {
                let out = controller::exit(&self.state)?;
                self.write_line(out.as_str()).await?;
                return Ok(());
            }
            match self.dispatch(choice).await? {
                Some(out) => self.write_line(out.as_str()).await?,
                None => {
                    debug!("input closed while reading arguments for {:?}", choice);
                    return Ok(());
                }
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<Option<String>> {
        let messages = self.state.messages();
        let out = match choice {
            MenuChoice::AddBook => {
                let Some(title) = self.read_prompted(messages.title_prompt()).await? else { return Ok(None) };
                let Some(author) = self.read_prompted(messages.author_prompt()).await? else { return Ok(None) };
                controller::add_book(&self.state, self.library_service.as_mut(), title.as_str(), author.as_str())?
            }
            MenuChoice::ListBooks => {
                controller::list_books(&self.state, self.library_service.as_ref())?
            }
            MenuChoice::SearchByTitle => {
                let Some(title) = self.read_prompted(messages.title_prompt()).await? else { return Ok(None) };
                controller::search_book(&self.state, self.library_service.as_ref(), SearchBy::Title, title.as_str())?
            }
            MenuChoice::SearchByAuthor => {
                let Some(author) = self.read_prompted(messages.author_prompt()).await? else { return Ok(None) };
                controller::search_book(&self.state, self.library_service.as_ref(), SearchBy::Author, author.as_str())?
            }
            MenuChoice::BorrowBook => {
                let Some(title) = self.read_prompted(messages.title_prompt()).await? else { return Ok(None) };
                controller::borrow_book(&self.state, self.library_service.as_mut(), title.as_str())?
            }
            MenuChoice::ReturnBook => {
                let Some(title) = self.read_prompted(messages.title_prompt()).await? else { return Ok(None) };
                controller::return_book(&self.state, self.library_service.as_mut(), title.as_str())?
            }
            MenuChoice::Exit => controller::exit(&self.state)?,
        };
        Ok(Some(out))
    }

    async fn read_prompted(&mut self, prompt: &str) -> LibraryResult<Option<String>> {
        self.prompt(prompt).await?;
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become replacement characters and fail validation
        // like any other bad input.
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    // Menus and prompts are for people, so JSON output leaves them out.
    async fn prompt(&mut self, text: &str) -> LibraryResult<()> {
        if self.state.format == OutputFormat::Text {
            self.writer.write_all(text.as_bytes()).await?;
            self.writer.flush().await?;
        }
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use crate::shell::config::OutputFormat;
    use crate::shell::controller::AppState;
    use crate::shell::menu::{MenuChoice, Shell};
    use crate::shell::messages::Language;

    async fn run_script(language: Language, format: OutputFormat, input: &str) -> String {
        run_bytes(language, format, input.as_bytes()).await
    }

    async fn run_bytes(language: Language, format: OutputFormat, input: &[u8]) -> String {
        let mut shell = Shell::new(AppState::new(language, format), input, Vec::new());
        shell.run().await.expect("shell should run");
        String::from_utf8(shell.into_writer()).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_parse_menu_choices() {
        assert_eq!(Ok(MenuChoice::AddBook), MenuChoice::try_from("1"));
        assert_eq!(Ok(MenuChoice::ReturnBook), MenuChoice::try_from(" 6 "));
        assert_eq!(Ok(MenuChoice::Exit), MenuChoice::try_from("7"));
        assert!(MenuChoice::try_from("0").is_err());
        assert!(MenuChoice::try_from("8").is_err());
        assert!(MenuChoice::try_from("abc").is_err());
        assert!(MenuChoice::try_from("").is_err());
        assert!(MenuChoice::try_from("-1").is_err());
    }

    #[tokio::test]
    async fn test_should_add_and_list_books() {
        let out = run_script(Language::En, OutputFormat::Text,
                             "1\nThe Left Hand of Darkness\nUrsula K. Le Guin\n2\n7\n").await;
        assert!(out.contains("Book added: The Left Hand of Darkness by Ursula K. Le Guin"));
        assert!(out.contains("- The Left Hand of Darkness by Ursula K. Le Guin"));
        assert!(out.contains("Current stock: The Left Hand of Darkness x3"));
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_should_retry_after_invalid_choice() {
        let out = run_script(Language::En, OutputFormat::Text, "abc\n9\n2\n7\n").await;
        assert_eq!(2, out.matches("Invalid input. Please try again.").count());
        assert!(out.contains("There are no books registered."));
        assert_eq!(4, out.matches("Choice: ").count());
    }

    #[tokio::test]
    async fn test_should_retry_after_invalid_utf8() {
        let out = run_bytes(Language::En, OutputFormat::Text, b"\xff\xfe\n2\n7\n").await;
        assert_eq!(1, out.matches("Invalid input. Please try again.").count());
        assert!(out.contains("There are no books registered."));
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[tokio::test]
    async fn test_should_keep_title_after_invalid_utf8_choice() {
        let mut input = b"\xc3\x28\n1\nDune\nHerbert\n".to_vec();
        input.extend_from_slice(b"5\nDune\n7\n");
        let out = run_bytes(Language::En, OutputFormat::Json, input.as_slice()).await;
        let lines: Vec<Value> = out.lines()
            .map(|l| serde_json::from_str(l).expect("each line is json"))
            .collect();
        assert_eq!(4, lines.len());
        assert!(lines[0]["invalid_choice"].is_string());
        assert_eq!("Dune", lines[1]["book"]["title"]);
        assert_eq!("Borrowed", lines[2]["status"]);
    }

    #[tokio::test]
    async fn test_should_borrow_and_return_scenario() {
        let mut script = String::from("1\nDune\nHerbert\n");
        script.push_str(&"5\nDune\n".repeat(4));
        script.push_str(&"6\nDune\n".repeat(4));
        script.push_str("7\n");
        let out = run_script(Language::En, OutputFormat::Text, script.as_str()).await;
        assert_eq!(3, out.matches("You borrowed \"Dune\".").count());
        assert_eq!(1, out.matches("\"Dune\" is out of stock.").count());
        assert_eq!(3, out.matches("You returned \"Dune\".").count());
        assert_eq!(1, out.matches("No copy of \"Dune\" is on loan").count());
    }

    #[tokio::test]
    async fn test_should_search_by_title_and_author() {
        let out = run_script(Language::En, OutputFormat::Text,
                             "3\nMissing\n1\nDune\nHerbert\n1\nChildren of Dune\nHerbert\n4\nHerbert\n7\n").await;
        assert!(out.contains("There is no book titled \"Missing\"."));
        assert!(out.contains("Title  : Dune\n"));
        assert!(!out.contains("Title  : Children of Dune"));
    }

    #[tokio::test]
    async fn test_should_stop_at_end_of_input() {
        let out = run_script(Language::En, OutputFormat::Text, "1\nDune\n").await;
        assert!(!out.contains("Book added"));
        let out = run_script(Language::En, OutputFormat::Text, "").await;
        assert!(out.contains("1. Add book"));
    }

    #[tokio::test]
    async fn test_should_render_korean_messages() {
        let out = run_script(Language::Ko, OutputFormat::Text, "5\n없는 책\n7\n").await;
        assert!(out.contains("도서관 관리 프로그램"));
        assert!(out.contains("저희 도서관에 \"없는 책\"(이)라는 책은 없습니다."));
        assert!(out.ends_with("프로그램을 종료합니다.\n"));
    }

    #[tokio::test]
    async fn test_should_write_json_lines() {
        let out = run_script(Language::En, OutputFormat::Json, "1\nDune\nHerbert\n5\nDune\nx\n7\n").await;
        let lines: Vec<Value> = out.lines()
            .map(|l| serde_json::from_str(l).expect("each line is json"))
            .collect();
        assert_eq!(4, lines.len());
        assert_eq!("Dune", lines[0]["book"]["title"]);
        assert_eq!("Borrowed", lines[1]["status"]);
        assert_eq!("x", lines[2]["invalid_choice"]);
        assert_eq!(true, lines[3]["exit"]);
    }
}
