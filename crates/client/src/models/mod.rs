//! Wire types for the backend API.
//!
//! The backend speaks camelCase JSON with Spanish field names; these
//! structs pin every field to its exact wire name via serde renames while
//! keeping English names on the Rust side. They are transfer objects: no
//! invariants are enforced locally beyond field presence and types.

pub mod audit;
pub mod auth;
pub mod invoice;
pub mod order;
pub mod page;
pub mod product;
pub mod user;

pub use audit::{ActionCount, AuditFilter, AuditRecord, AuditStats, EntityCount};
pub use auth::{
    AuthUser, ChangePasswordRequest, Credentials, LoginResponse, MessageResponse,
    RecoveryRequest, RegisterRequest, RegisterResponse, ResetPasswordRequest,
};
pub use invoice::{
    Invoice, InvoiceDetail, InvoiceFilter, InvoiceUpdate, NewInvoice, NewInvoiceItem,
};
pub use order::{
    NewOrder, NewOrderItem, Order, OrderDetail, OrderFilter, OrderStats, OrderStatusBreakdown,
};
pub use page::{Page, SortOrder};
pub use product::{NewProduct, Product, ProductFilter, ProductUpdate};
pub use user::{RoleInfo, User, UserPage, UserPageMeta};
