//! Data models exchanged with the Biblioteka backend

pub mod author;
pub mod book;
pub mod collection;
pub mod enums;
pub mod loan;
pub mod page;
pub mod reader;
pub mod reservation;

// Re-export commonly used types
pub use author::{Author, AuthorField};
pub use book::{Book, BookField};
pub use collection::{Collection, CollectionField};
pub use enums::{Nationality, ReservationStatus};
pub use loan::{Loan, LoanField};
pub use page::{Page, PageQuery, QueryParams, SortBy, SortField, SortOrder};
pub use reader::{Reader, ReaderField, User};
pub use reservation::{Reservation, ReservationField};
