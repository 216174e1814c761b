pub mod use_cases;

pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
    resolve_session::{ResolveSessionError, ResolveSessionUseCase},
};
