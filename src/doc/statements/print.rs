/*!
# `PRINT <expression>`

## Purpose
Prints the value of one expression on a line of its own.

## Example
```text
PRINT (1 + 2) * 3
9
```

*/
