use clap::ValueEnum;
use crate::books::dto::{BookDto, BookInfoDto};
use crate::core::library::{BorrowStatus, Listing, ReturnStatus};
use crate::ledger::dto::StockDto;

#[derive(Debug, PartialEq, Clone, Copy, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ko,
}

// Messages renders results for people. Nothing here decides an outcome, it
// only phrases one.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn menu(&self) -> &'static str {
        match self.language {
            Language::En => "\nLibrary Manager\n1. Add book\n2. List all books\n3. Search by title\n\
                             4. Search by author\n5. Borrow book\n6. Return book\n7. Exit\n",
            Language::Ko => "\n도서관 관리 프로그램\n1. 책 추가\n2. 모든 책 출력\n3. 책 검색\n\
                             4. 작가 검색\n5. 책 대여\n6. 책 반납\n7. 종료\n",
        }
    }

    pub fn choice_prompt(&self) -> &'static str {
        match self.language {
            Language::En => "Choice: ",
            Language::Ko => "선택: ",
        }
    }

    pub fn title_prompt(&self) -> &'static str {
        match self.language {
            Language::En => "Title: ",
            Language::Ko => "책 제목: ",
        }
    }

    pub fn author_prompt(&self) -> &'static str {
        match self.language {
            Language::En => "Author: ",
            Language::Ko => "책 저자: ",
        }
    }

    pub fn invalid_choice(&self) -> &'static str {
        match self.language {
            Language::En => "Invalid input. Please try again.",
            Language::Ko => "잘못된 입력입니다. 다시 시도하세요.",
        }
    }

    pub fn goodbye(&self) -> &'static str {
        match self.language {
            Language::En => "Exiting the program.",
            Language::Ko => "프로그램을 종료합니다.",
        }
    }

    pub fn book_added(&self, book: &BookDto) -> String {
        match self.language {
            Language::En => format!("Book added: {} by {}", book.title, book.author),
            Language::Ko => format!("책이 추가되었습니다: {} by {}", book.title, book.author),
        }
    }

    pub fn book_list(&self, books: &Listing<BookDto>) -> String {
        match books {
            Listing::Empty => match self.language {
                Language::En => "There are no books registered.".to_string(),
                Language::Ko => "현재 등록된 책이 없습니다.".to_string(),
            },
            Listing::Records(records) => {
                let header = match self.language {
                    Language::En => "Current books:",
                    Language::Ko => "현재 도서 목록:",
                };
                let mut out = header.to_string();
                for book in records {
                    out.push_str(format!("\n- {} by {}", book.title, book.author).as_str());
                }
                out
            }
        }
    }

    pub fn stock_list(&self, stock: &Listing<StockDto>) -> String {
        let (header, none) = match self.language {
            Language::En => ("Current stock: ", "none"),
            Language::Ko => ("현재 재고 : ", "없음"),
        };
        match stock {
            Listing::Empty => format!("{}{}", header, none),
            Listing::Records(records) => {
                let entries: Vec<String> = records.iter().map(|s| match self.language {
                    Language::En => format!("{} x{}", s.title, s.count),
                    Language::Ko => format!("{} {}개", s.title, s.count),
                }).collect();
                format!("{}{}", header, entries.join(", "))
            }
        }
    }

    pub fn book_info(&self, info: &BookInfoDto) -> String {
        let stock = match (info.stock, self.language) {
            (Some(count), _) => count.to_string(),
            (None, Language::En) => "unknown".to_string(),
            (None, Language::Ko) => "알 수 없음".to_string(),
        };
        match self.language {
            Language::En => format!(
                "┌────────── Book info ──────────\n│ Title  : {}\n│ Author : {}\n│ Stock  : {}\n└───────────────────────────────",
                info.title, info.author, stock),
            Language::Ko => format!(
                "┌────────── 책 정보──────────\n│ 제목 : {}\n│ 저자 : {}\n│ 재고 : {}\n└────────────────────────────",
                info.title, info.author, stock),
        }
    }

    pub fn title_not_found(&self, title: &str) -> String {
        match self.language {
            Language::En => format!("There is no book titled \"{}\".", title),
            Language::Ko => format!("{}(이)라는 책은 없습니다.", title),
        }
    }

    pub fn author_not_found(&self, author: &str) -> String {
        match self.language {
            Language::En => format!("There are no books by {}.", author),
            Language::Ko => format!("{}의 책은 없습니다.", author),
        }
    }

    pub fn borrow_result(&self, title: &str, status: BorrowStatus) -> String {
        match (status, self.language) {
            (BorrowStatus::Borrowed, Language::En) => format!("You borrowed \"{}\".", title),
            (BorrowStatus::Borrowed, Language::Ko) => format!("\"{}\"을(를) 빌렸습니다.", title),
            (BorrowStatus::OutOfStock, Language::En) => format!("\"{}\" is out of stock.", title),
            (BorrowStatus::OutOfStock, Language::Ko) => format!("\"{}\"은(는) 재고가 다 떨어졌습니다.", title),
            (BorrowStatus::UnknownTitle, Language::En) => format!("Our library has no book called \"{}\".", title),
            (BorrowStatus::UnknownTitle, Language::Ko) => format!("저희 도서관에 \"{}\"(이)라는 책은 없습니다.", title),
        }
    }

    pub fn return_result(&self, title: &str, status: ReturnStatus) -> String {
        match (status, self.language) {
            (ReturnStatus::Returned, Language::En) => format!("You returned \"{}\".", title),
            (ReturnStatus::Returned, Language::Ko) => format!("\"{}\"을(를) 반납했습니다.", title),
            (ReturnStatus::AtCapacity, Language::En) =>
                format!("No copy of \"{}\" is on loan, so this does not look like one of ours.", title),
            (ReturnStatus::AtCapacity, Language::Ko) =>
                format!("\"{}\"은(는) 대여 중인 것이 없는데, 저희 도서관 책이 아닌 거 같은데요?", title),
            (ReturnStatus::UnknownTitle, Language::En) =>
                format!("Our library has no book called \"{}\"... this does not look like one of ours.", title),
            (ReturnStatus::UnknownTitle, Language::Ko) =>
                format!("저희 도서관에 \"{}\"(이)라는 책은 없습니다... 저희 도서관 책이 아닌 거 같은데요?", title),
        }
    }
}
