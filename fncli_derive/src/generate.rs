mod command;
mod parameter;

#[cfg(test)]
pub(crate) fn simple_format(rust_str: String) -> String {
    rust_str
        .replace('{', "{\n")
        .replace('}', "}\n")
        .replace(';', ";\n")
}
