//! Pure predicates consulted by the sign-in reducer.

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Failure code: no account exists for the email.
pub const CODE_NO_ACCOUNT: u32 = 1;
/// Failure code: the password does not match the account.
pub const CODE_INCORRECT_PASSWORD: u32 = 2;
/// Failure code: the service could not process the request.
pub const CODE_SERVICE_ERROR: u32 = 3;

/// Structural email check: `local@domain.tld`.
///
/// This only looks at shape (allowed characters, label rules, a top-level
/// domain of at least two letters). It says nothing about deliverability.
/// Quoted local parts and IP-literal domains are rejected.
pub fn is_email_valid(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    is_local_part_valid(local) && is_domain_valid(domain)
}

fn is_local_part_valid(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local.chars().all(|c| {
        c.is_alphanumeric() || c == '.' || "!#$%&'*+-/=?^_`{|}~".contains(c)
    })
}

fn is_domain_valid(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return false;
    }

    // Punycode TLDs (xn--...) are the only ones allowed to carry digits or dashes.
    let tld = labels[labels.len() - 1];
    tld.starts_with("xn--") || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
}

/// True when the password is shorter than [`MIN_PASSWORD_LEN`].
pub fn is_password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}

pub fn is_no_account(code: u32) -> bool {
    code == CODE_NO_ACCOUNT
}

pub fn is_incorrect_password(code: u32) -> bool {
    code == CODE_INCORRECT_PASSWORD
}

/// Code 3, and every code the service is not known to send.
pub fn is_service_err(code: u32) -> bool {
    !is_no_account(code) && !is_incorrect_password(code)
}
