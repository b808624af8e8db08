//! Integration tests for polygen-emit.

use polygen_emit::{generate_for, get_backend};
use polygen_model::{ClassDef, FieldDef, MethodDef};
use polygen_typeexpr::{TypeNode, parse};

fn person(body: &str) -> ClassDef {
    ClassDef::new("Person")
        .in_package("com.example.model")
        .with_docs("A person value object.")
        .with_field(FieldDef::private("name", TypeNode::new("java.lang.String")))
        .with_field(FieldDef::private(
            "tags",
            parse("java.util.List<java.lang.String>").unwrap(),
        ))
        .with_method(
            MethodDef::new("describe")
                .returning(TypeNode::new("java.lang.String"))
                .with_body(body),
        )
}

// === Java ===

#[cfg(feature = "backend-java")]
#[test]
fn java_value_object() {
    use polygen_emit::{JavaOptions, generate_java};

    let out = generate_java(&person("return this.name;"), &JavaOptions::default());
    let expected = r#"package com.example.model;

import java.util.List;

/** A person value object. */
public class Person {
    private String name;
    private List<String> tags;

    public String getName() {
        return this.name;
    }

    public void setName(String name) {
        this.name = name;
    }

    public List<String> getTags() {
        return this.tags;
    }

    public void setTags(List<String> tags) {
        this.tags = tags;
    }

    public String describe() {
        return this.name;
    }
}
"#;
    assert_eq!(out, expected);
}

#[cfg(feature = "backend-java")]
#[test]
fn java_supertypes_and_cross_package_imports() {
    use polygen_emit::{JavaOptions, generate_java};

    let class = ClassDef::new("Person")
        .in_package("com.example.model")
        .extending(TypeNode::new("com.example.core.Entity"))
        .implementing(parse("java.lang.Comparable<Person>").unwrap());
    let out = generate_java(&class, &JavaOptions::default());

    assert!(out.contains("import com.example.core.Entity;\n"));
    // java.lang needs no import.
    assert!(!out.contains("import java.lang.Comparable;"));
    assert!(out.contains("public class Person extends Entity implements Comparable<Person> {"));
}

// === Kotlin ===

#[cfg(feature = "backend-kotlin")]
#[test]
fn kotlin_value_object() {
    use polygen_emit::{KotlinOptions, generate_kotlin};

    let out = generate_kotlin(&person("return name.orEmpty()"), &KotlinOptions::default());
    let expected = r#"package com.example.model

/** A person value object. */
class Person {
    private var name: String? = null
    private var tags: List<String>? = null

    fun describe(): String {
        return name.orEmpty()
    }
}
"#;
    assert_eq!(out, expected);
}

// === TypeScript ===

#[cfg(feature = "backend-typescript")]
#[test]
fn typescript_value_object() {
    use polygen_emit::{TypeScriptOptions, generate_typescript};

    let out = generate_typescript(&person("return this.name;"), &TypeScriptOptions::default());
    let expected = r#"/** A person value object. */
export class Person {
  private name: string;
  private tags: Array<string>;

  getName(): string {
    return this.name;
  }

  setName(name: string): void {
    this.name = name;
  }

  getTags(): Array<string> {
    return this.tags;
  }

  setTags(tags: Array<string>): void {
    this.tags = tags;
  }

  describe(): string {
    return this.name;
  }
}
"#;
    assert_eq!(out, expected);
}

// === Registry dispatch ===

#[test]
fn registry_dispatch_by_name() {
    #[cfg(feature = "backend-java")]
    {
        let backend = get_backend("java").expect("java backend");
        assert_eq!(backend.extension(), "java");
        let out = generate_for("java", &person("return this.name;")).unwrap();
        assert!(out.contains("public class Person"));
    }
    #[cfg(feature = "backend-kotlin")]
    {
        assert_eq!(get_backend("kotlin").expect("kotlin backend").extension(), "kt");
    }
    #[cfg(feature = "backend-typescript")]
    {
        assert_eq!(
            get_backend("typescript").expect("typescript backend").extension(),
            "ts"
        );
    }
    assert!(generate_for("cobol", &person("x")).is_err());
}
