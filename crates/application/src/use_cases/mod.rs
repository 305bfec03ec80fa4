mod lookup;

pub use lookup::{Exchange, LookupReport, LookupUseCase};
