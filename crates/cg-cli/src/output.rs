use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        path: &'static str,
        time_limit: u32,
    }

    #[test]
    fn raw_is_single_line_json() {
        let value = Example {
            path: "src/lib.rs",
            time_limit: 70,
        };
        assert_eq!(
            render(&value, OutputFormat::Raw).unwrap(),
            r#"{"path":"src/lib.rs","time_limit":70}"#
        );
    }

    #[test]
    fn json_is_pretty_printed() {
        let value = Example {
            path: "a.py",
            time_limit: 40,
        };
        let rendered = render(&value, OutputFormat::Json).unwrap();
        assert!(rendered.contains('\n'));
        assert!(rendered.contains("\"time_limit\": 40"));
    }
}
