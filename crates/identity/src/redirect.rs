use url::Url;

static CALLBACK_PARAMS: [&str; 4] = ["code", "state", "error", "error_description"];

/// True when `href` is Auth0 returning to the configured redirect target.
///
/// Other redirect handshakes in the app also carry `code` and `state`, so the location
/// must match the redirect uri exactly and not just carry the parameters.
pub(crate) fn is_redirect_callback(redirect_uri: &str, href: &str) -> bool {
	let (Ok(target), Ok(current)) = (Url::parse(redirect_uri), Url::parse(href)) else {
		return false;
	};
	if target.origin() != current.origin() || target.path() != current.path() {
		return false;
	}
	let mut has_state = false;
	let mut has_outcome = false;
	for (key, _) in current.query_pairs() {
		match key.as_ref() {
			"state" => has_state = true,
			"code" | "error" => has_outcome = true,
			_ => {}
		}
	}
	has_state && has_outcome
}

/// `href` with the Auth0 callback parameters removed, so a reload does not replay them.
pub(crate) fn without_callback_params(href: &str) -> Option<String> {
	let mut url = Url::parse(href).ok()?;
	let kept = url
		.query_pairs()
		.filter(|(key, _)| !CALLBACK_PARAMS.contains(&key.as_ref()))
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.collect::<Vec<_>>();
	if kept.is_empty() {
		url.set_query(None);
	} else {
		url.query_pairs_mut().clear().extend_pairs(kept);
	}
	Some(url.to_string())
}

#[cfg(test)]
mod test {
	use super::*;

	static REDIRECT: &str = "http://localhost:8080/";

	#[test]
	fn auth0_return_is_detected() {
		assert!(is_redirect_callback(REDIRECT, "http://localhost:8080/?code=abc&state=xyz"));
		assert!(is_redirect_callback(
			REDIRECT,
			"http://localhost:8080/?error=access_denied&error_description=nope&state=xyz"
		));
	}

	#[test]
	fn plain_visit_is_not_a_callback() {
		assert!(!is_redirect_callback(REDIRECT, "http://localhost:8080/"));
		assert!(!is_redirect_callback(REDIRECT, "http://localhost:8080/?code=abc"));
	}

	#[test]
	fn other_handshakes_are_left_alone() {
		assert!(!is_redirect_callback(
			REDIRECT,
			"http://localhost:8080/integration/callback?code=abc&state=xyz"
		));
		assert!(!is_redirect_callback(REDIRECT, "http://example.com/?code=abc&state=xyz"));
	}

	#[test]
	fn strips_only_callback_params() {
		assert_eq!(
			without_callback_params("http://localhost:8080/?code=abc&state=xyz").as_deref(),
			Some("http://localhost:8080/")
		);
		assert_eq!(
			without_callback_params("http://localhost:8080/?code=abc&tab=profile&state=xyz").as_deref(),
			Some("http://localhost:8080/?tab=profile")
		);
	}
}
