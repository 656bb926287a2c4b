#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        basic in this is OK
        "class Foo {
          getValue() {
            return this.value;
          }
        }
        var foo = Foo();
        foo.value = \"baz\";
        print foo.getValue();";
        "baz"
    }

    tests! {
        closure in this is OK
        "class Foo {
          getThis() {
            fun closure() {
              return this;
            }
            return closure;
          }
        }
        var foo = Foo();
        var closure = foo.getThis();
        print closure() == foo;";
        "true"
    }

    tests! {
        this_at_top_level in this is ERR
        "print this;";
        "[Line 1] error at 'this': Cannot use 'this' outside of a class"
    }

    tests! {
        this_in_top_level_function in this is ERR
        "fun notAMethod() {
          print this;
        }";
        "[Line 2] error at 'this': Cannot use 'this' outside of a class"
    }
}
