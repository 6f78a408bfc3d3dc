//! Route table and per-route access rules.

/// Every navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    RecoveryPassword,
    Products,
    Orders,
    CreateOrder,
    Profile,
    Invoices,
    DirectInvoice,
}

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Open to everyone, signed in or not.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users holding at least one of the listed roles.
    Roles(&'static [&'static str]),
}

impl RouteAccess {
    /// The administrator-only rule.
    #[must_use]
    pub const fn admin_only() -> Self {
        Self::Roles(&["ADMIN"])
    }
}

impl Route {
    /// The canonical path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::RecoveryPassword => "/recovery-password",
            Self::Products => "/productos",
            Self::Orders => "/pedidos",
            Self::CreateOrder => "/crear-pedido",
            Self::Profile => "/perfil",
            Self::Invoices => "/facturas",
            Self::DirectInvoice => "/facturas/directa",
        }
    }

    /// Resolve a path back to its route, if it names one.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        const ALL: [Route; 10] = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::RecoveryPassword,
            Route::Products,
            Route::Orders,
            Route::CreateOrder,
            Route::Profile,
            Route::Invoices,
            Route::DirectInvoice,
        ];
        ALL.into_iter().find(|route| route.path() == path)
    }

    /// The access rule for this route.
    #[must_use]
    pub const fn access(self) -> RouteAccess {
        match self {
            Self::Home | Self::Login | Self::Register | Self::RecoveryPassword => {
                RouteAccess::Public
            }
            Self::Products | Self::Profile => RouteAccess::Authenticated,
            Self::Orders => RouteAccess::Roles(&["ADMIN", "SUPERVISOR", "CLIENTE"]),
            Self::CreateOrder => RouteAccess::Roles(&["CLIENTE", "ADMIN"]),
            Self::Invoices => RouteAccess::Roles(&["ADMIN", "SUPERVISOR"]),
            Self::DirectInvoice => RouteAccess::admin_only(),
        }
    }
}
