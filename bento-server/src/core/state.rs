use shared::AppResult;

use crate::auth::SessionService;
use crate::core::Config;
use crate::orders::OrderService;
use crate::reports::ReportService;
use crate::store::{
    DepartmentRepository, EmployeeRepository, JsonStore, MealOrderRepository,
    OrderWindowRepository,
};

/// Server state holding every service the handlers need
///
/// All members are cheap to clone: repositories carry only the store path and
/// the session service shares one map across clones, so the state itself can
/// be cloned per request by axum.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub departments: DepartmentRepository,
    pub employees: EmployeeRepository,
    pub windows: OrderWindowRepository,
    pub orders: OrderService,
    pub reports: ReportService,
    sessions: SessionService,
}

impl ServerState {
    /// Open the store (seeding defaults on first run) and wire the services
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let store = JsonStore::open(config.data_dir())?;
        tracing::info!(data_dir = %store.data_dir().display(), "Store opened");

        let departments = DepartmentRepository::new(store.clone());
        let employees = EmployeeRepository::new(store.clone());
        let windows = OrderWindowRepository::new(store.clone());
        let meal_orders = MealOrderRepository::new(store);

        let orders = OrderService::new(
            meal_orders.clone(),
            employees.clone(),
            config.cutoff_policy(),
        );
        let reports = ReportService::new(meal_orders, employees.clone());
        let sessions = SessionService::new(config.session_timeout());

        Ok(Self {
            config: config.clone(),
            departments,
            employees,
            windows,
            orders,
            reports,
            sessions,
        })
    }

    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }
}
