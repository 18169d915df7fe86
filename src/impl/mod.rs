// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod documents_json_datasource;
        pub(crate) mod export_config_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod document_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod in_memory_document_repository;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod csv_draft;
        pub(crate) mod date_range;
        pub(crate) mod document;
        pub(crate) mod export_config;
        pub(crate) mod export_issue;
        pub(crate) mod export_row;
    }
    pub(crate) mod logic {
        pub(crate) mod export_validator;
        mod issue_messages;
        pub(crate) mod status_transitions;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod document_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod document_usecase;
        pub(crate) mod export_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_encoder;
    pub(crate) mod issue_fmt;
    pub(crate) mod issue_report;
    pub(crate) mod shift_jis_encoder;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::csv_draft::*;
        pub use crate::domain::entities::date_range::*;
        pub use crate::domain::entities::document::*;
        pub use crate::domain::entities::export_config::*;
        pub use crate::domain::entities::export_issue::*;
        pub use crate::domain::entities::export_row::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::in_memory_document_repository::*;
        pub use crate::domain::repositories::document_repository::*;
    }

    pub mod validation {
        pub use crate::domain::logic::export_validator::*;
        pub use crate::domain::logic::status_transitions::*;
    }

    pub mod encoding {
        pub use crate::presentation::csv_encoder::to_csv;
        pub use crate::presentation::shift_jis_encoder::*;
    }
}
