/*!
# Introductory Tutorial

Start the `basic` executable from a terminal. There is no banner; the
interpreter simply waits for a line. Type CTRL-D or `QUIT` to exit.

A line without a line number is executed right away. This is called
direct mode. Only `LET`, `PRINT` and `INPUT` work in direct mode.

<pre><code>&nbsp;> LET a = 6 * 7
&nbsp;> PRINT a
&nbsp;  42
</code></pre>

A line that starts with a line number is stored instead of executed.
Stored lines make up the program. Lines may be typed in any order; they
are always kept sorted by line number.

<pre><code>&nbsp;> 20 PRINT a
&nbsp;> 10 LET a = 5
&nbsp;> 30 END
&nbsp;> LIST
&nbsp;  10 LET a = 5
&nbsp;  20 PRINT a
&nbsp;  30 END
&nbsp;> RUN
&nbsp;  5
</code></pre>

Typing a line number that already exists replaces that line. Typing a
line number by itself deletes the line.

<pre><code>&nbsp;> 20 PRINT a * 2
&nbsp;> 30
&nbsp;> LIST
&nbsp;  10 LET a = 5
&nbsp;  20 PRINT a * 2
</code></pre>

When something goes wrong the interpreter prints one of four messages and
returns to the prompt. A running program stops at the first error.

<pre><code>&nbsp;> PRINT b
&nbsp;  <b>VARIABLE NOT DEFINED</b>
&nbsp;> PRINT 1 / 0
&nbsp;  <b>DIVIDE BY ZERO</b>
&nbsp;> PAINT 1
&nbsp;  <b>SYNTAX ERROR</b>
</code></pre>

A program that loops forever can be stopped with CTRL-C.

<pre><code>&nbsp;> 10 GOTO 10
&nbsp;> RUN
&nbsp;<i>{CTRL-C}</i>
&nbsp;  BREAK IN 10
</code></pre>

The rest of this manual is reference material.

*/
