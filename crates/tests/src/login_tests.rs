use pretty_assertions::assert_eq;
use shared_types::accounts::{authenticate, DEMO_ACCOUNTS};
use shared_types::{AppErrorKind, UserRole};

#[test]
fn every_demo_account_can_sign_in() {
    for account in DEMO_ACCOUNTS {
        let user = authenticate(account.email, account.password, account.role)
            .unwrap_or_else(|_| panic!("{} should sign in", account.email));
        assert_eq!(user.id, account.id);
        assert_eq!(user.role, account.role);
        assert_eq!(user.display_name, account.display_name);
    }
}

#[test]
fn email_is_case_insensitive_and_trimmed() {
    let user = authenticate(
        "  BUYER@AcmeImports.test  ",
        "buyer-sesame",
        UserRole::Buyer,
    )
    .unwrap();
    assert_eq!(user.id, 2);
}

#[test]
fn password_is_exact() {
    let err = authenticate("buyer@acmeimports.test", "Buyer-Sesame", UserRole::Buyer).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[test]
fn valid_credentials_with_wrong_role_are_rejected() {
    // A supplier cannot sign in through the buyer form, nor through
    // the admin portal.
    for wrong_role in [UserRole::Buyer, UserRole::Admin] {
        let err = authenticate(
            "supplier@shenzhenparts.test",
            "supplier-sesame",
            wrong_role,
        )
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }
}

#[test]
fn all_failures_share_one_message() {
    // The forms must not leak whether the email, password, or role was wrong.
    let wrong_email = authenticate("ghost@nowhere.test", "buyer-sesame", UserRole::Buyer);
    let wrong_password = authenticate("buyer@acmeimports.test", "nope", UserRole::Buyer);
    let wrong_role = authenticate("buyer@acmeimports.test", "buyer-sesame", UserRole::Admin);

    let messages: Vec<String> = [wrong_email, wrong_password, wrong_role]
        .into_iter()
        .map(|r| r.unwrap_err().message)
        .collect();
    assert_eq!(messages[0], messages[1]);
    assert_eq!(messages[1], messages[2]);
}
