#[cfg(test)]
pub mod test {
    /// The reference document most tests look things up in.
    pub const SAMPLE_JSON: &str = r#"
    {
        "int": 10,
        "float": 10.0,
        "negative_float": -3.9,
        "str": "hello",
        "flag": true,
        "nothing": null,
        "str_array": ["one", "two", "three"],
        "int_array": [0, 1, 2, 3],
        "float_array": [1.5, 2.0, -0.5],
        "empty_array": [],
        "mixed_array": [1, "two"],
        "object_array": [{"name": "a"}, {"name": "b"}],
        "nested": {
            "int": 11,
            "str": "tvelwe",
            "deeper": {
                "port": 8080
            }
        }
    }
    "#;

    /// The same shape as [`SAMPLE_JSON`], written as TOML.
    pub const SAMPLE_TOML: &str = r#"
int = 10
float = 10.0
str = "hello"
flag = true
str_array = ["one", "two", "three"]
int_array = [0, 1, 2, 3]

[nested]
int = 11
str = "tvelwe"

[nested.deeper]
port = 8080
"#;

    pub const INVALID: &str = "invalid json";
}
