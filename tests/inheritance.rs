#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        constructor in inheritance is OK
        "class Base {
          init(value) {
            this.value = value;
          }
        }

        class Derived < Base {}

        print Derived(\"value\").value;";
        "value"
    }

    tests! {
        inherit_from_function in inheritance is ERR
        "fun notAClass() {}

        class Sub < notAClass {}";
        "Superclass must be a class."
        "[line 3]"
    }

    tests! {
        inherit_from_nil in inheritance is ERR
        "var Nope = nil;
        class Sub < Nope {}";
        "Superclass must be a class."
        "[line 2]"
    }

    tests! {
        inherit_methods in inheritance is OK
        "class Base {
          foo() { print \"foo\"; }
          bar() { print \"bar\"; }
        }

        class Derived < Base {}

        var d = Derived();
        d.foo();
        d.bar();
        d.bar();";
        "foo"
        "bar"
        "bar"
    }

    tests! {
        parenthesized_superclass in inheritance is ERR
        "class Base {}
        class Derived < (Base) {}";
        "[Line 2] error at '(': Expect superclass name"
    }

    tests! {
        set_fields_from_base_class in inheritance is OK
        "class Base {
          init() {
            this.foo = 1;
            this.bar = 2;
          }
          showFields() {
            print \"foo \" + this.foo;
            print \"bar \" + this.bar;
          }
        }

        class Derived < Base {}

        var base = Base();
        base.showFields();

        var derived = Derived();
        derived.showFields();";
        "foo 1"
        "bar 2"
        "foo 1"
        "bar 2"
    }
}
