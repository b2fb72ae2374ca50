pub mod core {
    pub mod command;
    pub mod domain;
    pub mod library;
}

pub mod books {
    pub mod domain;
    pub mod dto;
}

pub mod catalog {
    pub mod domain;
    pub mod factory;
}

pub mod ledger {
    pub mod domain;
    pub mod dto;
    pub mod factory;
}

pub mod library;
pub mod shell;

pub mod utils {
    pub mod logging;
}
