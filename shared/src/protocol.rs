use crate::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MaintenanceRequest, MaintenanceStatus,
    MessageResponse, Property, ResendOtpRequest, ResetPasswordRequest, SendOtpRequest,
    SignupRequest, VerifyOtpRequest, VerifyResetOtpRequest,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path, relative to the API base.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Auth endpoints (never carry a bearer token)
// =========================================================

pub const PATH_LOGIN: &str = "/auth/login";
pub const PATH_SIGNUP: &str = "/auth/signup";
pub const PATH_SEND_OTP: &str = "/auth/send-otp";
pub const PATH_VERIFY_OTP: &str = "/auth/verify-otp";
pub const PATH_FORGOT_PASSWORD: &str = "/auth/forgot-password";
pub const PATH_VERIFY_RESET_OTP: &str = "/auth/verify-reset-otp";
pub const PATH_RESET_PASSWORD: &str = "/auth/reset-password";
pub const PATH_RESEND_OTP: &str = "/auth/resend-otp";

/// Every endpoint reachable without a session.
pub const AUTH_ENDPOINTS: [&str; 8] = [
    PATH_LOGIN,
    PATH_SIGNUP,
    PATH_SEND_OTP,
    PATH_VERIFY_OTP,
    PATH_FORGOT_PASSWORD,
    PATH_VERIFY_RESET_OTP,
    PATH_RESET_PASSWORD,
    PATH_RESEND_OTP,
];

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = PATH_LOGIN;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for SignupRequest {
    type Response = MessageResponse;
    const PATH: &'static str = PATH_SIGNUP;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for SendOtpRequest {
    type Response = MessageResponse;
    const PATH: &'static str = PATH_SEND_OTP;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Successful verification signs the user in.
impl ApiRequest for VerifyOtpRequest {
    type Response = AuthResponse;
    const PATH: &'static str = PATH_VERIFY_OTP;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for ResendOtpRequest {
    type Response = MessageResponse;
    const PATH: &'static str = PATH_RESEND_OTP;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for ForgotPasswordRequest {
    type Response = MessageResponse;
    const PATH: &'static str = PATH_FORGOT_PASSWORD;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for VerifyResetOtpRequest {
    type Response = MessageResponse;
    const PATH: &'static str = PATH_VERIFY_RESET_OTP;
    const METHOD: HttpMethod = HttpMethod::Post;
}

impl ApiRequest for ResetPasswordRequest {
    type Response = MessageResponse;
    const PATH: &'static str = PATH_RESET_PASSWORD;
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Caretaker endpoints
// =========================================================

/// List the properties the signed-in caretaker manages
#[derive(Debug, Serialize, Deserialize)]
pub struct ListAssignedPropertiesRequest;

impl ApiRequest for ListAssignedPropertiesRequest {
    type Response = Vec<Property>;
    const PATH: &'static str = "/caretaker/properties";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List open and recent maintenance requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ListMaintenanceRequestsRequest;

impl ApiRequest for ListMaintenanceRequestsRequest {
    type Response = Vec<MaintenanceRequest>;
    const PATH: &'static str = "/caretaker/maintenance-requests";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceStatusRequest {
    pub request_id: String,
    pub status: MaintenanceStatus,
}

impl ApiRequest for UpdateMaintenanceStatusRequest {
    type Response = MaintenanceRequest;
    const PATH: &'static str = "/caretaker/maintenance-requests/status";
    const METHOD: HttpMethod = HttpMethod::Patch;
}
