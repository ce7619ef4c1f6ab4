//! Output framing and stdin forwarding, byte for byte.

#![cfg(unix)]

mod support;

use support::c_toolchain;

#[test]
fn printf_writes_the_literal_with_no_added_framing() {
   let result = c_toolchain()
      .run(
         r#"
#include <stdio.h>

int main(void) {
    printf("Hello World!");
    return 0;
}
"#,
         &[],
         &[],
         "",
      )
      .unwrap();
   assert_eq!(result.status, 0);
   assert_eq!(result.stdout, "Hello World!");
   assert_eq!(result.stderr, "");
}

#[test]
fn puts_appends_exactly_one_newline() {
   let result = c_toolchain()
      .run(
         r#"
#include <stdio.h>

int main(void) {
    puts("Hello World!");
    return 0;
}
"#,
         &[],
         &[],
         "",
      )
      .unwrap();
   assert_eq!(result.status, 0);
   assert_eq!(result.stdout, "Hello World!\n");
}

#[test]
fn the_program_sees_stdin_verbatim() {
   // An echo program: whatever the caller supplies on stdin, embedded
   // newlines included, must come back byte-identical on stdout.
   let result = c_toolchain()
      .run(
         r#"
#include <stdio.h>

int main(void) {
    int c;
    while ((c = getchar()) != EOF) putchar(c);
    return 0;
}
"#,
         &[],
         &[],
         "testing\ntesting\none two",
      )
      .unwrap();
   assert_eq!(result.status, 0);
   assert_eq!(result.stdout, "testing\ntesting\none two");
   assert_eq!(result.stderr, "");
}

#[test]
fn the_program_receives_its_argument_vector() {
   let result = c_toolchain()
      .run(
         r#"
#include <stdio.h>

int main(int argc, char** argv) {
    for (int i = 1; i < argc; i++) printf("%s;", argv[i]);
    return 0;
}
"#,
         &[],
         &["first".to_string(), "second one".to_string()],
         "",
      )
      .unwrap();
   assert_eq!(result.status, 0);
   assert_eq!(result.stdout, "first;second one;");
}
