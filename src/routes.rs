//! Route table and guard.
//!
//! Protected routes substitute the login view in place of the requested
//! view when no authenticated session exists — component substitution,
//! not an HTTP redirect. Authentication is the single derived predicate
//! `Session::is_authenticated()`; the root path uses the same predicate
//! as every other protected route.

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Every navigable path of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Root,
    Login,
    Registro,
    Dashboard,
    DashboardAdmin,
    Pacientes,
    Citas,
    Administrativos,
    Notificaciones,
    Pagos,
    Consultas,
    Diagnostico,
    Evolucion,
}

/// The view actually rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Registro,
    Dashboard,
    DashboardAdmin,
    Pacientes,
    Citas,
    Administrativos,
    Notificaciones,
    Pagos,
    Consultas,
    Diagnostico,
    Evolucion,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Root),
            "/login" => Some(Self::Login),
            "/registro" => Some(Self::Registro),
            "/dashboard" => Some(Self::Dashboard),
            "/dashboard-admin" => Some(Self::DashboardAdmin),
            "/pacientes" => Some(Self::Pacientes),
            "/citas" => Some(Self::Citas),
            "/administrativos" => Some(Self::Administrativos),
            "/notificaciones" => Some(Self::Notificaciones),
            "/pagos" => Some(Self::Pagos),
            "/consultas" => Some(Self::Consultas),
            "/diagnostico" => Some(Self::Diagnostico),
            "/evolucion" => Some(Self::Evolucion),
            _ => None,
        }
    }

    /// Registration and the login page itself are reachable logged-out.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Registro)
    }

    fn view(&self) -> View {
        match self {
            Self::Root | Self::Dashboard => View::Dashboard,
            Self::Login => View::Login,
            Self::Registro => View::Registro,
            Self::DashboardAdmin => View::DashboardAdmin,
            Self::Pacientes => View::Pacientes,
            Self::Citas => View::Citas,
            Self::Administrativos => View::Administrativos,
            Self::Notificaciones => View::Notificaciones,
            Self::Pagos => View::Pagos,
            Self::Consultas => View::Consultas,
            Self::Diagnostico => View::Diagnostico,
            Self::Evolucion => View::Evolucion,
        }
    }
}

/// Resolve the view for a route given the current session.
pub fn resolve(route: Route, session: Option<&Session>) -> View {
    if route.is_public() {
        return route.view();
    }
    let authenticated = session.map(Session::is_authenticated).unwrap_or(false);
    if authenticated {
        route.view()
    } else {
        View::Login
    }
}
