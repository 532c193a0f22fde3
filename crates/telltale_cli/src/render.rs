use anyhow::Context;
use telltale::ParseResult;

/// Turns a [`ParseResult`] into something printable
pub trait Render {
    fn render(result: &ParseResult, pretty: bool) -> anyhow::Result<String>;
}

pub struct Json;

impl Render for Json {
    fn render(result: &ParseResult, pretty: bool) -> anyhow::Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        out.with_context(|| "cannot render json")
    }
}

pub struct Toml;

impl Render for Toml {
    fn render(result: &ParseResult, pretty: bool) -> anyhow::Result<String> {
        // `args` comes after the tables in the struct, a Value reorders them
        let value = toml::Value::try_from(result).with_context(|| "cannot render toml")?;
        let out = if pretty {
            toml::to_string_pretty(&value)
        } else {
            toml::to_string(&value)
        };
        out.with_context(|| "cannot render toml")
    }
}

pub struct Inspect;

impl Render for Inspect {
    fn render(result: &ParseResult, pretty: bool) -> anyhow::Result<String> {
        let out = if pretty {
            format!("{:#?}", result)
        } else {
            format!("{:?}", result)
        };
        Ok(out)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Toml,
    Debug,
}

impl Default for Format {
    fn default() -> Self {
        Self::Json
    }
}

impl Format {
    pub fn render(self, result: &ParseResult, pretty: bool) -> anyhow::Result<String> {
        match self {
            Self::Json => Json::render(result, pretty),
            Self::Toml => Toml::render(result, pretty),
            Self::Debug => Inspect::render(result, pretty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseResult {
        telltale::parse(&["--foo", "bar", "-boo", "far", "-fiz=faz", "x", "--biz=baz", "y"])
    }

    #[test]
    fn json() {
        let result = sample();
        for &pretty in &[false, true] {
            let out = Format::Json.render(&result, pretty).unwrap();
            assert_eq!(out.contains('\n'), pretty);

            let back: ParseResult = serde_json::from_str(&out).unwrap();
            assert_eq!(back, result);
        }
    }

    #[test]
    fn toml() {
        let result = sample();
        for &pretty in &[false, true] {
            let out = Format::Toml.render(&result, pretty).unwrap();
            let back: ParseResult = toml::from_str(&out).unwrap();
            assert_eq!(back, result);
        }
    }

    #[test]
    fn toml_empty() {
        let out = Format::Toml.render(&ParseResult::default(), false).unwrap();
        let back: ParseResult = toml::from_str(&out).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn debug() {
        let result = sample();
        let out = Format::Debug.render(&result, false).unwrap();
        assert!(out.starts_with("ParseResult {"));
        assert!(!out.contains('\n'));

        let out = Format::Debug.render(&result, true).unwrap();
        assert!(out.contains("\n    args: [\n"), "{}", out);
    }
}
