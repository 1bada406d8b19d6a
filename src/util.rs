pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

pub(crate) fn join_display<I, T>(values: I, separator: &str) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut joined = String::new();
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            joined.push_str(separator);
        }
        joined.push_str(value.as_ref());
    }
    joined
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
