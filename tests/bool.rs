#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        equality in bool is OK
        "print true == true;
        print true == false;
        print false == true;
        print false == false;
        print true == 1;
        print false == 0;
        print true == \"true\";
        print false == \"false\";";
        "true"
        "false"
        "false"
        "true"
        "false"
        "false"
        "false"
        "false"
    }

    tests! {
        not in bool is OK
        "print !true;
        print !false;
        print !!true;";
        "false"
        "true"
        "true"
    }
}
