// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod assets_csv_datasource;
        pub(crate) mod distribution_rules_csv_datasource;
        pub(crate) mod expenses_csv_datasource;
        pub(crate) mod revenues_csv_datasource;
        mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod distribution_type_model;
        pub(crate) mod year_month_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod distribution;
        pub(crate) mod distribution_rule;
        pub(crate) mod ledger_records;
        pub(crate) mod payable_party;
        pub(crate) mod records;
        pub(crate) mod report;
        pub(crate) mod year_month;
    }
    pub(crate) mod logic {
        pub(crate) mod distribution_engine;
        pub(crate) mod distribution_processor;
        pub(crate) mod note_processor;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod distribution_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod report_json;
    pub(crate) mod report_printer;
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
        pub use crate::domain::entities::distribution::*;
        pub use crate::domain::entities::distribution_rule::*;
        pub use crate::domain::entities::ledger_records::*;
        pub use crate::domain::entities::payable_party::*;
        pub use crate::domain::entities::records::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::year_month::*;
    }

    pub mod distribution {
        pub use crate::domain::logic::distribution_engine::{
            aggregate_across_businesses, compute_monthly_distribution, monthly_financials,
            months_considered,
        };
    }

    pub mod repositories {
        pub use crate::data::repositories::ledger_repository_impl::*;
        pub use crate::domain::repositories::ledger_repository::*;
    }
}
