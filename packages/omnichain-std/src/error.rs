/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The following macros are mostly intended to serve as pseudo-documentation within tests,
// in addition to convenience/clarity

/// Assert that a [`Result`] is [`Ok`]
///
/// If the provided expression evaluates to [`Ok`], then the
/// macro returns the value contained within the [`Ok`]. If
/// the [`Result`] is an [`Err`] then the macro will [`panic`]
/// with a message that includes the expression and the error.
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            std::result::Result::Ok(v) => v,
            std::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that an [`Option`] is [`Some`]
///
/// If the provided expression evaluates to [`Some`], then the
/// macro returns the value contained within the [`Some`]. If
/// the [`Option`] is [`None`] then the macro will [`panic`]
/// with a message that includes the expression
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a [`Result`] is [`Err`] and matches a desired error
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), e)
                }
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Assert that a `try_` contract client call failed with the given contract error.
///
/// Host failures (panics, auth failures) do not satisfy this assertion.
#[macro_export]
macro_rules! assert_contract_err {
    ( $given:expr, $expected:expr ) => {
        match $given {
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error {:?} when calling {}, got {:?} instead",
                    $expected,
                    stringify!($given),
                    v
                )
            }
            std::result::Result::Err(std::result::Result::Ok(e)) => {
                assert_eq!(e, $expected)
            }
            std::result::Result::Err(std::result::Result::Err(e)) => {
                panic!(
                    "Expected error {:?} when calling {}, got invocation error {:?} instead",
                    $expected,
                    stringify!($given),
                    e
                )
            }
        }
    };
}

/// Invoke a `try_` client method with auth mocked for `$caller` only and assert that the
/// invocation fails with a host error.
#[macro_export]
macro_rules! assert_invoke_auth_err {
    ( $caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? ) ) => {{
        use soroban_sdk::IntoVal;

        let fn_name = stringify!($method).trim_start_matches("try_");
        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name,
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        match call_result {
            std::result::Result::Err(std::result::Result::Err(_)) => {}
            other => panic!(
                "Expected auth error when calling {}, got {:?} instead",
                stringify!($method),
                other
            ),
        }
    }};
}

/// Invoke a `try_` client method with auth mocked for `$caller` only and assert that it succeeds.
#[macro_export]
macro_rules! assert_invoke_auth_ok {
    ( $caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? ) ) => {{
        use soroban_sdk::IntoVal;

        let fn_name = stringify!($method).trim_start_matches("try_");
        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name,
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        match call_result {
            std::result::Result::Ok(std::result::Result::Ok(v)) => v,
            other => panic!(
                "Expected {} to succeed, got {:?} instead",
                stringify!($method),
                other
            ),
        }
    }};
}

#[cfg(test)]
mod test {
    #[derive(Debug, PartialEq, Eq)]
    enum TestError {
        Failed,
    }

    fn check(value: u32) -> Result<u32, TestError> {
        ensure!(value > 1, TestError::Failed);
        Ok(value)
    }

    #[test]
    fn ensure_returns_error_when_condition_fails() {
        assert_err!(check(1), TestError::Failed);
        assert_eq!(assert_ok!(check(2)), 2);
    }

    #[test]
    fn assert_some_unwraps_value() {
        assert_eq!(assert_some!(Some(3)), 3);
    }
}
