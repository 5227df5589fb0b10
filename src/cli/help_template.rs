use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Writing a value explicitly (prints offset and csize)
      %BINARY_NAME% data.bp write "Hello, world!"

      # Writing a value from stdin
      cat file.txt | %BINARY_NAME% data.bp write

      # Reading a record back by offset and on-disk size
      %BINARY_NAME% data.bp read 1024 13

      # Finding the newest 64-byte slot that contains "head"
      %BINARY_NAME% data.bp find 64 head

      # Padding the file to the next 1024-byte boundary
      %BINARY_NAME% data.bp pad

      # Displaying record file info
      %BINARY_NAME% data.bp info

    Logging goes to stderr and is controlled by RUST_LOG (default: warn).
"#};
