//! RentEase 前后端共享的数据模型
//!
//! 所有结构体与后端 JSON 契约一一对应，字段统一使用 camelCase。

use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 用户与角色 (Users & Roles)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Tenant,
    Landlord,
    Caretaker,
    Business,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Tenant,
        UserRole::Landlord,
        UserRole::Caretaker,
        UserRole::Business,
        UserRole::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Tenant => "tenant",
            UserRole::Landlord => "landlord",
            UserRole::Caretaker => "caretaker",
            UserRole::Business => "business",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// 该角色专属面板的路由
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Tenant => "/dashboard/tenant",
            UserRole::Landlord => "/dashboard/landlord",
            UserRole::Caretaker => "/dashboard/caretaker",
            UserRole::Business => "/dashboard/business",
            UserRole::Admin => "/dashboard/admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =========================================================
// 认证流程载荷 (Auth Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

/// 登录 / OTP 校验成功后的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
    /// Token 有效期（秒），后端未提供时为 None
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub phone_number: String,
    pub id_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub phone_number: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResetOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// 只携带提示信息的通用响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// =========================================================
// 管理员 (Caretaker) 领域模型
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub total_units: u32,
    pub occupied_units: u32,
}

impl Property {
    pub fn vacant_units(&self) -> u32 {
        self.total_units.saturating_sub(self.occupied_units)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Resolved,
}

impl MaintenanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Pending => "Pending",
            MaintenanceStatus::InProgress => "In progress",
            MaintenanceStatus::Resolved => "Resolved",
        }
    }

    /// 工单推进的下一个状态，已解决则没有
    pub fn next(&self) -> Option<MaintenanceStatus> {
        match self {
            MaintenanceStatus::Pending => Some(MaintenanceStatus::InProgress),
            MaintenanceStatus::InProgress => Some(MaintenanceStatus::Resolved),
            MaintenanceStatus::Resolved => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub property_id: String,
    pub unit: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub reported_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_its_path_segment() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
            assert!(role.dashboard_path().ends_with(role.as_str()));
        }
        assert_eq!(UserRole::parse("owner"), None);
    }

    #[test]
    fn auth_response_tolerates_missing_expiry() {
        let body = r#"{
            "token": "abc",
            "user": {"id": "u1", "fullName": "Jane Wanjiru", "phoneNumber": "+254712345678", "role": "caretaker"}
        }"#;
        let resp: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.expires_in, None);
        assert_eq!(resp.user.role, UserRole::Caretaker);
        assert_eq!(resp.user.email, None);
    }

    #[test]
    fn vacant_units_never_underflow() {
        let p = Property {
            id: "p1".into(),
            name: "Sunrise Court".into(),
            location: "Kilimani".into(),
            total_units: 4,
            occupied_units: 6,
        };
        assert_eq!(p.vacant_units(), 0);
    }

    #[test]
    fn maintenance_status_advances_until_resolved() {
        let mut status = MaintenanceStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                MaintenanceStatus::Pending,
                MaintenanceStatus::InProgress,
                MaintenanceStatus::Resolved
            ]
        );
        assert_eq!(
            serde_json::to_string(&MaintenanceStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
