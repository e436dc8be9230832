//! Bento Server - factory meal-ordering backend
//!
//! # Overview
//!
//! Employees order lunch and dinner (diet and rice-portion choices) before
//! per-meal cutoff times; administrators maintain departments, employees and
//! ordering windows, override orders past the cutoff and pull kitchen
//! statistics. Everything persists to flat JSON files.
//!
//! # Module structure
//!
//! ```text
//! bento-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # Session 认证
//! ├── store/         # JSON 文件存储与仓库
//! ├── orders/        # 订餐业务逻辑 (截止时间)
//! ├── reports/       # 统计报表
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod reports;
pub mod store;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, SessionService};
pub use core::{Config, Server, ServerState};
pub use orders::{CutoffPolicy, OrderService};
pub use reports::ReportService;
pub use store::JsonStore;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ )___  ____  / /_____
  / __  / _ \/ __ \/ __/ __ \
 / /_/ /  __/ / / / /_/ /_/ /
/_____/\___/_/ /_/\__/\____/
    "#
    );
}
