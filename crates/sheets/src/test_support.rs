//! Fixtures shared by the store and token tests.

/// Throwaway 2048-bit PKCS#1 key; never used outside tests.
pub const TEST_RSA_PEM: &str = include_str!("../testdata/service_account_rsa.pem");

pub const TEST_CLIENT_EMAIL: &str = "writer@demo.iam.gserviceaccount.com";

/// Service-account key JSON signed with [`TEST_RSA_PEM`] that exchanges
/// tokens at `token_uri`.
pub fn service_account_json(token_uri: &str) -> String {
    serde_json::json!({
        "type": "service_account",
        "client_email": TEST_CLIENT_EMAIL,
        "private_key": TEST_RSA_PEM,
        "private_key_id": "kid-1",
        "token_uri": token_uri,
    })
    .to_string()
}
